use std::fs;

// Raw JSON as the page would have left it in storage.
pub fn stored_record() -> String {
    fs::read_to_string("tests/fixtures/records/progress_record_v1.json").unwrap()
}
