//! Profiles that ship with draftkit.
//!
//! Every identifier here is reachable through the alias table in
//! `draftkit_core::domain::aliases`; `gomodule` is only ever selected through
//! variant substitution from `go`.

use draftkit_core::domain::{DomainError, LanguageId, Profile};

/// `(id, display name, description)`.
const BUILTIN: &[(&str, &str, &str)] = &[
    ("clojure", "Clojure", "Leiningen uberjar on a JRE base image"),
    ("csharp", "C#", ".NET SDK build with an ASP.NET runtime image"),
    ("erlang", "Erlang", "rebar3 release on an Alpine base image"),
    ("go", "Go", "Go build using GOPATH-style layout"),
    ("gomodule", "Go Module", "Go build with module download caching"),
    ("gradle", "Gradle", "Gradle build for JVM languages"),
    ("java", "Java", "Maven build on a JRE base image"),
    ("javascript", "JavaScript", "Node.js with npm install"),
    ("php", "PHP", "PHP with Composer on an Apache image"),
    ("python", "Python", "Python with pip requirements"),
    ("ruby", "Ruby", "Ruby with Bundler"),
    ("rust", "Rust", "Cargo release build on a slim runtime image"),
    ("swift", "Swift", "Swift package build"),
];

/// All built-in profiles, sorted by identifier.
pub fn all_profiles() -> Result<Vec<Profile>, DomainError> {
    BUILTIN
        .iter()
        .map(|(id, name, description)| {
            LanguageId::new(id).map(|id| Profile::builtin(id, *name, *description))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profiles_are_valid_and_sorted() {
        let profiles = all_profiles().unwrap();
        assert_eq!(profiles.len(), BUILTIN.len());

        for profile in &profiles {
            profile.validate().unwrap();
        }

        let ids: Vec<_> = profiles.iter().map(|p| p.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn go_variant_is_shipped() {
        let profiles = all_profiles().unwrap();
        assert!(profiles.iter().any(|p| p.id.as_str() == "go"));
        assert!(profiles.iter().any(|p| p.id.as_str() == "gomodule"));
    }
}
