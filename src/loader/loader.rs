use std::{fs, path::Path};

use anyhow::Context;
use num_format::{Locale, ToFormattedString};

use crate::{
    directory::{directory::Directory, options::DirectoryOptions},
    model::person::Person,
};

#[derive(Debug)]
pub struct LoadedDirectory {
    pub directory: Directory,
    /// Records turned away by the strict constraints, always 0 when not strict
    pub rejected: usize,
}

pub fn read_people(path: &Path) -> anyhow::Result<Vec<Person>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read people file: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse people file: {}", path.display()))
}

/// Strict loading applies `DirectoryOptions::new_strict` and skips what it rejects
pub fn populate(people: Vec<Person>, strict: bool) -> LoadedDirectory {
    if !strict {
        let mut directory = Directory::new();

        for person in people {
            directory.add(person);
        }

        return LoadedDirectory {
            directory,
            rejected: 0,
        };
    }

    let mut directory = Directory::with_options(DirectoryOptions::new_strict());
    let mut rejected = 0;

    for person in people {
        // The directory logs the reason
        if directory.try_add(person).is_err() {
            rejected += 1;
        }
    }

    LoadedDirectory {
        directory,
        rejected,
    }
}

pub fn load_directory(path: &Path, strict: bool) -> anyhow::Result<LoadedDirectory> {
    let loaded = populate(read_people(path)?, strict);

    log::info!(
        "Loaded {} people from {} ({} rejected)",
        loaded.directory.count().to_formatted_string(&Locale::en),
        path.display(),
        loaded.rejected
    );

    Ok(loaded)
}

/// Report lines printed by the binary
pub fn summary(loaded: &LoadedDirectory, email: Option<&str>) -> Vec<String> {
    let directory = &loaded.directory;

    let mut lines = vec![
        format!(
            "People: {}",
            directory.count().to_formatted_string(&Locale::en)
        ),
        format!(
            "Adults: {}",
            directory.adults().count().to_formatted_string(&Locale::en)
        ),
    ];

    if loaded.rejected > 0 {
        lines.push(format!(
            "Rejected: {}",
            loaded.rejected.to_formatted_string(&Locale::en)
        ));
    }

    match directory.average_age() {
        Ok(average_age) => lines.push(format!("Average age: {:.2}", average_age)),
        Err(err) => lines.push(format!("Average age: n/a ({})", err)),
    }

    if let Some(email) = email {
        match directory.find_by_email(email) {
            Some(person) => lines.push(person.greet()),
            None => lines.push(format!("No person with email: {}", email)),
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    const PEOPLE: &str = r#"[
        {"name": "Bob", "email": "bob@example.com", "age": 30},
        {"name": "Bob Again", "email": "bob@example.com", "age": 31},
        {"name": "Minor", "email": "minor@example.com", "age": -1}
    ]"#;

    fn people_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("should create temp file");
        file.write_all(contents.as_bytes())
            .expect("should write temp file");
        file
    }

    mod load {
        use super::*;

        #[test]
        fn missing_file() {
            let dir = TempDir::new().expect("should create temp dir");
            let path = dir.path().join("missing.json");

            let err = load_directory(&path, false).expect_err("missing file should fail");

            assert!(err.to_string().contains("Failed to read people file"));
        }

        #[test]
        fn malformed_json() {
            let file = people_file(r#"[{"name": "Bob""#);

            let err = load_directory(file.path(), false).expect_err("bad json should fail");

            assert!(err.to_string().contains("Failed to parse people file"));
        }

        #[test]
        fn permissive_keeps_every_record() {
            let file = people_file(PEOPLE);

            let loaded = load_directory(file.path(), false).expect("should load");

            assert_eq!(loaded.directory.count(), 3);
            assert_eq!(loaded.rejected, 0);
        }

        #[test_log::test]
        fn strict_skips_rejected_records() {
            // Given a duplicate email and a negative age
            let file = people_file(PEOPLE);

            // When loading strictly
            let loaded = load_directory(file.path(), true).expect("should load");

            // Then only the first Bob is kept
            assert_eq!(loaded.directory.count(), 1);
            assert_eq!(loaded.rejected, 2);
            assert_eq!(
                loaded
                    .directory
                    .find_by_email("bob@example.com")
                    .map(|p| p.name.as_str()),
                Some("Bob")
            );
        }
    }

    mod report {
        use super::*;

        #[test]
        fn empty_directory() {
            let loaded = populate(vec![], false);

            assert_eq!(
                summary(&loaded, None),
                vec![
                    "People: 0",
                    "Adults: 0",
                    "Average age: n/a (cannot calculate average of empty slice)",
                ]
            );
        }

        #[test]
        fn found_and_rejected() {
            let loaded = populate(
                vec![
                    Person::new("Bob", "bob@example.com", 30),
                    Person::new("Bob", "bob@example.com", 30),
                    Person::new("Minor", "minor@example.com", 10),
                ],
                true,
            );

            assert_eq!(
                summary(&loaded, Some("bob@example.com")),
                vec![
                    "People: 2",
                    "Adults: 1",
                    "Rejected: 1",
                    "Average age: 20.00",
                    "Hello, Bob!",
                ]
            );
        }

        #[test]
        fn not_found() {
            let loaded = populate(vec![Person::new("Bob", "bob@example.com", 30)], false);

            let lines = summary(&loaded, Some("alice@example.com"));

            assert_eq!(
                lines.last().map(String::as_str),
                Some("No person with email: alice@example.com")
            );
        }
    }
}
