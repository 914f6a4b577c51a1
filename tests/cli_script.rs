use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn script_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("retail_core_cli").unwrap();
    cmd.env("RETAIL_CORE_CLI_SCRIPT", "1")
        .env("RETAIL_CORE_HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = TempDir::new().unwrap();
    let input = "add\nRice\n100\n12\ny\nBeans\n50\n20\nn\npurchase 1=4 2=11\ngain\nexit\n";

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("New item 'Rice' successfully added."))
        .stdout(contains("RECEIPT"))
        .stdout(contains("|     245.00 ||    1195.00 |"))
        .stdout(contains("| Today's Total Gain: 1195.00 |"));
}

#[test]
fn invalid_entries_are_reported_and_retried() {
    let home = TempDir::new().unwrap();
    let input = "add\nRice\nabc\ny\nRice\n-1\ny\nRice\n100\n1\nx\nn\nset-price\n7\nn\nlist\n";

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Invalid input!!"))
        .stdout(contains("Invalid price!!"))
        .stdout(contains("Invalid Input!!"))
        .stdout(contains("Invalid Item ID"));
}

#[test]
fn overdrawn_stock_is_flagged() {
    let home = TempDir::new().unwrap();
    let input = "add\nRice\n100\n2\nn\npurchase 1=5\nlist\n";

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("'Rice' is overdrawn: quantity is now -3"));
}

#[test]
fn currency_setting_persists_between_runs() {
    let home = TempDir::new().unwrap();

    script_cmd(&home)
        .write_stdin("config currency $\n")
        .assert()
        .success();

    script_cmd(&home)
        .write_stdin("add\nTea\n100\n20\nn\npurchase 1=1\n")
        .assert()
        .success()
        .stdout(contains("Unit ($)"));
}

#[test]
fn unknown_command_suggests_closest() {
    let home = TempDir::new().unwrap();

    script_cmd(&home)
        .write_stdin("purchse\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `purchse`"))
        .stdout(contains("Suggestion: `purchase`?"));
}
