// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Shared by the `deps` test of every crate in the workspace, which runs from the crate directory.
use std::collections::BTreeSet;
use std::fs;

const DEPENDENCY_TABLES: [&str; 3] = ["dependencies", "build-dependencies", "dev-dependencies"];

fn listed_deps() -> BTreeSet<String> {
    let manifest = fs::read_to_string("Cargo.toml").expect("Cargo.toml must exist");
    let manifest: toml::Table = toml::from_str(&manifest).expect("Cargo.toml must be valid");

    DEPENDENCY_TABLES
        .iter()
        .filter_map(|key| manifest.get(*key).and_then(toml::Value::as_table))
        .flat_map(|table| table.keys().cloned())
        .collect()
}

fn documented_deps() -> BTreeSet<String> {
    let markdown = fs::read_to_string("DEPS.md").expect("DEPS.md must exist");

    markdown
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .map(|dep| dep.trim().to_string())
        .collect()
}

#[test]
fn check_deps_documented() {
    let listed = listed_deps();
    let documented = documented_deps();

    let undocumented = listed.difference(&documented).collect::<Vec<_>>();
    assert!(
        undocumented.is_empty(),
        "some Cargo.toml dependencies are not in DEPS.md: {undocumented:?}"
    );

    let stale = documented.difference(&listed).collect::<Vec<_>>();
    assert!(
        stale.is_empty(),
        "DEPS.md lists dependencies no longer present in Cargo.toml: {stale:?}"
    );
}
