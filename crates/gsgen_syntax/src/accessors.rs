//! Accessor naming grammar shared by the resolver and the emitters.
//! `mcsi_Magi` -> meaningful `Magi` -> `mcfn_getMagi` / `mcfn_setMagi(int &siL_Magi)`.

/// Prefix of every generated member function.
pub const ACCESSOR_PREFIX: &str = "mcfn_";

/// Variable-name marker of a structure member; forces the `SL` parameter prefix.
pub const STRUCT_MARKER: &str = "mcS_";

/// Part of the identifier after its last underscore, or the whole identifier.
pub fn meaningful_name(name: &str) -> &str {
    match name.rfind('_') {
        Some(i) => &name[i + 1..],
        None => name,
    }
}

/// First character upper-cased, remainder unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Getter name: mcfn_get<Capitalized>.
pub fn getter_name(capitalized: &str) -> String {
    format!("{}get{}", ACCESSOR_PREFIX, capitalized)
}

/// Setter name: mcfn_set<Capitalized>.
pub fn setter_name(capitalized: &str) -> String {
    format!("{}set{}", ACCESSOR_PREFIX, capitalized)
}

/// Setter parameter name: <prefix>_<Capitalized>.
pub fn param_name(prefix: &str, capitalized: &str) -> String {
    format!("{}_{}", prefix, capitalized)
}
