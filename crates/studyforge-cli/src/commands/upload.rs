//! The `studyforge upload` command.

use std::path::Path;

use anyhow::Result;

use studyforge_store::ProfileStore;

use crate::files;

pub fn execute(store_path: &Path, file: &Path) -> Result<()> {
    let mut store = ProfileStore::open_or_create(store_path, "Student", "student@example.com")?;

    let material = files::parse_material_file(file)?;
    let id = material.id.clone();
    let name = material.name.clone();
    let topic_count = material.topics.len();

    store.add_material(material)?;

    println!("Uploaded course material '{name}' ({topic_count} topics)");
    println!("Material id: {id}");

    Ok(())
}
