//! Environment trait definition for dependency injection and testing

/// Read-only environment variable lookup.
///
/// Abstracts environment access so resolution logic can be tested against a
/// fake environment without touching process-wide state.
///
/// # Examples
///
/// ```
/// use envsub::env::{EnvLookup, MockEnv};
///
/// fn greeting<E: EnvLookup>(env: &E) -> Option<String> {
///     env.get("APP_NAME")
/// }
///
/// let env = MockEnv::new().with_var("APP_NAME", "World");
/// assert_eq!(greeting(&env), Some("World".to_string()));
/// ```
pub trait EnvLookup: Send + Sync {
    /// Return the value of the variable `name`, or `None` if it is unset
    /// or not valid unicode.
    fn get(&self, name: &str) -> Option<String>;
}
