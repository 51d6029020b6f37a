use regex::Regex;
use std::{fs::read_to_string, path::Path};

#[test]
fn readme_reference_links_are_sorted() {
    let re = Regex::new(r"^\[[^^\]]*\]:").unwrap();
    let readme = read_to_string("README.md").unwrap();
    let links = readme
        .lines()
        .filter(|line| re.is_match(line))
        .collect::<Vec<_>>();
    let mut links_sorted = links.clone();
    links_sorted.sort_unstable();
    assert!(
        links_sorted == links,
        "contents of README.md are not what was expected:\n{}",
        links_sorted.join("\n")
    );
}

#[test]
fn readme_mentions_every_binary() {
    let readme = read_to_string("README.md").unwrap();
    for bin in ["docker", "docker-compose"] {
        assert!(readme.contains(&format!("`{bin}`")), "{bin}");
    }
}

#[test]
fn workspace_members_are_unpublishable() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let contents = read_to_string(manifest_dir.join("Cargo.toml")).unwrap();
    let table = toml::from_str::<toml::Table>(&contents).unwrap();
    let members = table
        .get("workspace")
        .and_then(|value| value.as_table())
        .and_then(|table| table.get("members"))
        .and_then(|value| value.as_array())
        .unwrap();
    assert!(!members.is_empty());
    for member in members {
        let path = manifest_dir.join(member.as_str().unwrap()).join("Cargo.toml");
        let contents = read_to_string(&path).unwrap();
        let table = toml::from_str::<toml::Table>(&contents).unwrap();
        let publish = table
            .get("package")
            .and_then(|value| value.as_table())
            .and_then(|package| package.get("publish"))
            .and_then(toml::Value::as_bool);
        assert_eq!(Some(false), publish, "failed for `{}`", path.display());
    }
}
