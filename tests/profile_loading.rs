//! Profile Loading Integration Tests
//!
//! Loads a realistic profile YAML from disk and checks the parsed shape.

use std::io::Write;

use folio::Profile;
use tempfile::TempDir;

const PROFILE_YAML: &str = r#"
general:
  name: Jane Doe
  position: Software Engineer
  description: |
    Jane builds network tooling and writes about it.

contact:
  city: Berlin
  mail: jane@example.com
  github: https://github.com/janedoe
  other:
    - title: Homepage
      icon: icon-home
      link: https://janedoe.example.com

work:
  - title: Example Corp
    subtitle: Software Engineer
    begin: "2019-05"
    end: ""
    description: Contract work across several stacks.
    tags: [Rust, Docker, Git]
    link: https://example.com
    thumbnail: example-corp.png
  - title: Widget Inc
    subtitle: Assembly Technician
    begin: "2015-05"
    end: "2019-05"

education:
  - title: Example University
    subtitle: BSc Computer Science
    begin: "2016-08"
    end: ""
    tags: [C, C++, Java]

publications:
  - title: How to Touch the Cloud
    subtitle: Article
    end: "2019-10-03"
    link: https://example.com/article
    attachment: cloud.pdf

languages:
  - title: English
    level: 100
  - title: German
    level: 15

interests:
  - title: Open Source Software
    icon: code
  - title: Reading
    icon: icon-book
"#;

#[test]
fn test_load_profile_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("profile.yaml");

    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(PROFILE_YAML.as_bytes()).unwrap();

    let profile = Profile::from_file(&path).unwrap();

    assert_eq!(profile.general.name, "Jane Doe");
    assert!(profile.general.description.contains("network tooling"));

    assert_eq!(profile.work.len(), 2);
    assert_eq!(profile.work[0].period(), "2019-05 – present");
    assert_eq!(profile.work[1].period(), "2015-05 – 2019-05");
    assert_eq!(profile.work[0].tags, vec!["Rust", "Docker", "Git"]);
    assert_eq!(profile.work[1].description, "");

    assert_eq!(profile.publications[0].period(), "2019-10-03");
    assert_eq!(
        profile.publications[0].attachment.as_deref(),
        Some("cloud.pdf")
    );

    assert_eq!(profile.languages[0].level, 100);
    assert_eq!(profile.interests.len(), 2);
    assert!(profile.volunteering.is_empty());
}

#[test]
fn test_invalid_profile_error_names_the_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("profile.yaml");

    std::fs::write(&path, "general: [not, a, mapping]\n").unwrap();

    let err = Profile::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("profile.yaml"));
}
