//! Named character references.
//!
//! [§ 13.5 Named character references](https://html.spec.whatwg.org/multipage/named-characters.html#named-character-references)
//!
//! A subset of the standard table: the markup-significant characters, the
//! common typographic entities and the Latin-1 names that are also
//! recognized without a trailing semicolon. Names are stored without the
//! leading `&`; legacy names appear once with and once without the `;`.

/// Entity names and their replacement text, sorted by byte order so that
/// lookups and prefix checks can binary search.
static ENTITIES: &[(&str, &str)] = &[
    ("AMP", "&"),
    ("AMP;", "&"),
    ("Aacute", "\u{00C1}"),
    ("Aacute;", "\u{00C1}"),
    ("Acirc", "\u{00C2}"),
    ("Acirc;", "\u{00C2}"),
    ("Agrave", "\u{00C0}"),
    ("Agrave;", "\u{00C0}"),
    ("Atilde", "\u{00C3}"),
    ("Atilde;", "\u{00C3}"),
    ("Auml", "\u{00C4}"),
    ("Auml;", "\u{00C4}"),
    ("COPY", "\u{00A9}"),
    ("COPY;", "\u{00A9}"),
    ("Ccedil", "\u{00C7}"),
    ("Ccedil;", "\u{00C7}"),
    ("Eacute", "\u{00C9}"),
    ("Eacute;", "\u{00C9}"),
    ("Egrave", "\u{00C8}"),
    ("Egrave;", "\u{00C8}"),
    ("GT", ">"),
    ("GT;", ">"),
    ("Iacute", "\u{00CD}"),
    ("Iacute;", "\u{00CD}"),
    ("Igrave", "\u{00CC}"),
    ("Igrave;", "\u{00CC}"),
    ("LT", "<"),
    ("LT;", "<"),
    ("Ntilde", "\u{00D1}"),
    ("Ntilde;", "\u{00D1}"),
    ("Oacute", "\u{00D3}"),
    ("Oacute;", "\u{00D3}"),
    ("Ograve", "\u{00D2}"),
    ("Ograve;", "\u{00D2}"),
    ("QUOT", "\""),
    ("QUOT;", "\""),
    ("REG", "\u{00AE}"),
    ("REG;", "\u{00AE}"),
    ("Uacute", "\u{00DA}"),
    ("Uacute;", "\u{00DA}"),
    ("Ugrave", "\u{00D9}"),
    ("Ugrave;", "\u{00D9}"),
    ("aacute", "\u{00E1}"),
    ("aacute;", "\u{00E1}"),
    ("acirc", "\u{00E2}"),
    ("acirc;", "\u{00E2}"),
    ("agrave", "\u{00E0}"),
    ("agrave;", "\u{00E0}"),
    ("alpha;", "\u{03B1}"),
    ("amp", "&"),
    ("amp;", "&"),
    ("apos;", "'"),
    ("atilde", "\u{00E3}"),
    ("atilde;", "\u{00E3}"),
    ("auml", "\u{00E4}"),
    ("auml;", "\u{00E4}"),
    ("beta;", "\u{03B2}"),
    ("bull;", "\u{2022}"),
    ("ccedil", "\u{00E7}"),
    ("ccedil;", "\u{00E7}"),
    ("cent", "\u{00A2}"),
    ("cent;", "\u{00A2}"),
    ("copy", "\u{00A9}"),
    ("copy;", "\u{00A9}"),
    ("darr;", "\u{2193}"),
    ("deg", "\u{00B0}"),
    ("deg;", "\u{00B0}"),
    ("delta;", "\u{03B4}"),
    ("divide", "\u{00F7}"),
    ("divide;", "\u{00F7}"),
    ("eacute", "\u{00E9}"),
    ("eacute;", "\u{00E9}"),
    ("egrave", "\u{00E8}"),
    ("egrave;", "\u{00E8}"),
    ("euro;", "\u{20AC}"),
    ("fjlig;", "fj"),
    ("frac12", "\u{00BD}"),
    ("frac12;", "\u{00BD}"),
    ("frac14", "\u{00BC}"),
    ("frac14;", "\u{00BC}"),
    ("frac34", "\u{00BE}"),
    ("frac34;", "\u{00BE}"),
    ("gamma;", "\u{03B3}"),
    ("ge;", "\u{2265}"),
    ("gt", ">"),
    ("gt;", ">"),
    ("hellip;", "\u{2026}"),
    ("iacute", "\u{00ED}"),
    ("iacute;", "\u{00ED}"),
    ("igrave", "\u{00EC}"),
    ("igrave;", "\u{00EC}"),
    ("laquo", "\u{00AB}"),
    ("laquo;", "\u{00AB}"),
    ("larr;", "\u{2190}"),
    ("ldquo;", "\u{201C}"),
    ("le;", "\u{2264}"),
    ("lsquo;", "\u{2018}"),
    ("lt", "<"),
    ("lt;", "<"),
    ("mdash;", "\u{2014}"),
    ("middot", "\u{00B7}"),
    ("middot;", "\u{00B7}"),
    ("nbsp", "\u{00A0}"),
    ("nbsp;", "\u{00A0}"),
    ("ndash;", "\u{2013}"),
    ("ne;", "\u{2260}"),
    ("not", "\u{00AC}"),
    ("not;", "\u{00AC}"),
    ("notin;", "\u{2209}"),
    ("ntilde", "\u{00F1}"),
    ("ntilde;", "\u{00F1}"),
    ("oacute", "\u{00F3}"),
    ("oacute;", "\u{00F3}"),
    ("ograve", "\u{00F2}"),
    ("ograve;", "\u{00F2}"),
    ("omega;", "\u{03C9}"),
    ("para", "\u{00B6}"),
    ("para;", "\u{00B6}"),
    ("pi;", "\u{03C0}"),
    ("plusmn", "\u{00B1}"),
    ("plusmn;", "\u{00B1}"),
    ("pound", "\u{00A3}"),
    ("pound;", "\u{00A3}"),
    ("quot", "\""),
    ("quot;", "\""),
    ("raquo", "\u{00BB}"),
    ("raquo;", "\u{00BB}"),
    ("rarr;", "\u{2192}"),
    ("rdquo;", "\u{201D}"),
    ("reg", "\u{00AE}"),
    ("reg;", "\u{00AE}"),
    ("rsquo;", "\u{2019}"),
    ("sect", "\u{00A7}"),
    ("sect;", "\u{00A7}"),
    ("sigma;", "\u{03C3}"),
    ("szlig", "\u{00DF}"),
    ("szlig;", "\u{00DF}"),
    ("times", "\u{00D7}"),
    ("times;", "\u{00D7}"),
    ("trade;", "\u{2122}"),
    ("uacute", "\u{00FA}"),
    ("uacute;", "\u{00FA}"),
    ("uarr;", "\u{2191}"),
    ("ugrave", "\u{00F9}"),
    ("ugrave;", "\u{00F9}"),
    ("yen", "\u{00A5}"),
    ("yen;", "\u{00A5}"),
];

/// Look up a named character reference by its full name (without the `&`).
///
/// ```
/// use wren_html::tokenizer::named_character_references::lookup_entity;
///
/// assert_eq!(lookup_entity("amp;"), Some("&"));
/// assert_eq!(lookup_entity("amp"), Some("&"));
/// assert_eq!(lookup_entity("apos"), None);
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    ENTITIES
        .binary_search_by(|(entity, _)| entity.cmp(&name))
        .ok()
        .map(|index| ENTITIES[index].1)
}

/// Returns true if some entity name starts with `prefix`.
///
/// The tokenizer keeps reading name characters only while this holds.
#[must_use]
pub fn any_entity_has_prefix(prefix: &str) -> bool {
    let start = ENTITIES.partition_point(|(entity, _)| *entity < prefix);
    ENTITIES
        .get(start)
        .is_some_and(|(entity, _)| entity.starts_with(prefix))
}

/// Find the longest entity name at the start of `candidate`.
///
/// Returns the matched name and its replacement text. `candidate` is the
/// text following the `&`; only a prefix of it needs to be an entity.
///
/// ```
/// use wren_html::tokenizer::named_character_references::longest_match;
///
/// assert_eq!(longest_match("notin;x"), Some(("notin;", "\u{2209}")));
/// assert_eq!(longest_match("notit;"), Some(("not", "\u{AC}")));
/// assert_eq!(longest_match("zz"), None);
/// ```
#[must_use]
pub fn longest_match(candidate: &str) -> Option<(&str, &'static str)> {
    let mut best = None;
    for (end, _) in candidate.char_indices().skip(1).chain([(candidate.len(), ' ')]) {
        let prefix = &candidate[..end];
        if !any_entity_has_prefix(prefix) {
            break;
        }
        if let Some(replacement) = lookup_entity(prefix) {
            best = Some((prefix, replacement));
        }
    }
    best
}
