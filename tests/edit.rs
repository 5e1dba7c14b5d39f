use assert_cmd::Command;
use predicates::str::contains;
use std::{env, fs};

fn temp_store(tag: &str) -> String {
    env::temp_dir()
        .join(format!("phonebook-{tag}-{}.json", std::process::id()))
        .to_string_lossy()
        .into_owned()
}

fn stored_records(store_path: &str) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let data = fs::read_to_string(store_path)?;
    Ok(serde_json::from_str(&data)?)
}

#[test]
fn edit_replaces_every_field_except_the_id() -> Result<(), Box<dyn std::error::Error>> {
    let store_path = temp_store("edit");
    let _ = fs::remove_file(&store_path);

    Command::cargo_bin("phonebook")?
        .env("PHONEBOOK_PATH", &store_path)
        .args([
            "add",
            "--name",
            "Alice",
            "--phone",
            "84031234567",
            "--mail",
            "alice@example.com",
            "--relative",
            "friends",
        ])
        .assert()
        .success();

    let records = stored_records(&store_path)?;
    let id = records[0]["id"].as_str().expect("id is a string").to_string();

    // Full replacement: the mail flag is not repeated, so the stored
    // mail must come out cleared rather than carried over.
    Command::cargo_bin("phonebook")?
        .env("PHONEBOOK_PATH", &store_path)
        .args([
            "edit",
            "--id",
            &id,
            "--name",
            "Alicia",
            "--phone",
            "84987654321",
            "--gender",
            "female",
        ])
        .assert()
        .success()
        .stdout(contains("Contact updated successfully"));

    let records = stored_records(&store_path)?;
    let record = &records[0];
    assert_eq!(record["id"], id.as_str());
    assert_eq!(record["name"], "Alicia");
    assert_eq!(record["phoneNum"], "84987654321");
    assert_eq!(record["gender"], "Female");
    assert!(record.get("mail").is_none());
    assert_eq!(record["relative"], "Others");
    assert_eq!(records.as_array().map(|a| a.len()), Some(1));

    let _ = fs::remove_file(&store_path);
    Ok(())
}

#[test]
fn editing_a_missing_id_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let store_path = temp_store("edit-missing");
    let _ = fs::remove_file(&store_path);

    Command::cargo_bin("phonebook")?
        .env("PHONEBOOK_PATH", &store_path)
        .args(["add", "--name", "Alice", "--phone", "84031234567"])
        .assert()
        .success();

    let before = stored_records(&store_path)?;

    Command::cargo_bin("phonebook")?
        .env("PHONEBOOK_PATH", &store_path)
        .args([
            "edit",
            "--id",
            "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "--name",
            "Nobody",
            "--phone",
            "84000000000",
        ])
        .assert()
        .success()
        .stdout(contains("No contact with id"));

    assert_eq!(stored_records(&store_path)?, before);

    let _ = fs::remove_file(&store_path);
    Ok(())
}
