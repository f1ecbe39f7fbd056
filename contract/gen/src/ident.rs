//! Identifier derivation for generated enum variants and marker structs.

/// Derives a PascalCase Rust identifier from a descriptor path.
///
/// Non-alphanumeric characters act as word breaks and are dropped. An
/// empty path (a route mounted exactly at the scope root) becomes
/// `Root`; a leading digit is prefixed with `N` to stay a valid
/// identifier.
///
/// Two distinct paths can collapse to the same identifier (just as two
/// descriptors can share a path outright); the generator does not
/// detect that, and the collision surfaces when the consuming crate
/// compiles the artifact.
///
/// ## Examples
///
/// ```
/// use contract_gen::ident::pascal_ident;
///
/// assert_eq!(pascal_ident("profile"), "Profile");
/// assert_eq!(pascal_ident("users/2"), "Users2");
/// assert_eq!(pascal_ident("sync:progress-report"), "SyncProgressReport");
/// assert_eq!(pascal_ident(""), "Root");
/// assert_eq!(pascal_ident("2fa/verify"), "N2faVerify");
/// ```
pub fn pascal_ident(path: &str) -> String {
    let mut out = String::new();
    let mut upper_next = true;

    for ch in path.chars() {
        if ch.is_ascii_alphanumeric() {
            if upper_next {
                out.push(ch.to_ascii_uppercase());
                upper_next = false;
            } else {
                out.push(ch);
            }
        } else {
            upper_next = true;
        }
    }

    if out.is_empty() {
        return "Root".to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, 'N');
    }
    out
}
