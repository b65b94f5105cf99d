use assert_cmd::Command;

pub fn moodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_ROOT");
    cmd.env_remove("MOODLOG_USER");
    cmd.env_remove("MOODLOG_LOG");
    cmd.env_remove("RUST_LOG");
    cmd
}
