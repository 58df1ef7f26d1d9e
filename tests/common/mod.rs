use assert_cmd::Command;

pub fn tagging_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagging").unwrap();
    cmd.env_remove("TAGGING_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
