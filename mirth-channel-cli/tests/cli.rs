// Runs the built binary against export directories on disk
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const HEADER: &str = "Name,Description,Source Data Type,Source Protocol : Address,Destination Data Type,Destination Protocol : Address\r\n";

fn channel(name: &str, enabled: bool, source_type: &str) -> String {
    format!(
        r#"<channel>
  <name>{name}</name>
  <description>Feed, nightly</description>
  <enabled>{enabled}</enabled>
  <sourceConnector>
    <properties>
      <property name="DataType">{source_type}</property>
      <property name="host">/in/{name}</property>
    </properties>
    <transformer><inboundProtocol>HL7V2</inboundProtocol></transformer>
  </sourceConnector>
  <destinationConnectors/>
</channel>"#
    )
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mirth-channel-cli"))
        .args(args)
        .arg("--quiet")
        .output()
        .unwrap()
}

fn dir_arg(dir: &TempDir) -> &str {
    dir.path().to_str().unwrap()
}

#[test]
fn test_report_on_stdout() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.xml"), channel("Beta", false, "File Reader")).unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/a.XML"), channel("Alpha", true, "JavaScript Reader")).unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let output = run_cli(&["--xml-dir", dir_arg(&dir)]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        format!(
            "{HEADER}Disabled,Beta,Feed; nightly,HL7 2.x,FILE: /in/Beta,,\r\n\
             ,Alpha,Feed; nightly,HL7 2.x,JS: /in/Alpha,,\r\n"
        )
    );
}

#[test]
fn test_unknown_data_type_fails_without_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.xml"), channel("Good", true, "File Reader")).unwrap();
    fs::write(dir.path().join("b.xml"), channel("Bad", true, "DICOM Listener")).unwrap();

    let output = run_cli(&["--xmlDir", dir_arg(&dir)]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("b.xml"));
    assert!(stderr.contains("DICOM Listener not defined"));
}

#[test]
fn test_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    let output = run_cli(&["-d", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_empty_directory_prints_header_only() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["-d", dir_arg(&dir)]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), HEADER);
}

#[test]
fn test_config_file_selects_directory_and_email_mode() {
    let dir = TempDir::new().unwrap();
    let exports = dir.path().join("exports");
    fs::create_dir(&exports).unwrap();
    fs::write(
        exports.join("mail.xml"),
        r#"<channel><name>Mail</name><description/><enabled>true</enabled>
<sourceConnector><properties><property name="DataType">Channel Reader</property></properties></sourceConnector>
<destinationConnectors><connector><properties>
<property name="DataType">Email Sender</property>
<property name="hostname">smtp</property>
<property name="subject">Hi</property>
<property name="smtpPort">25</property>
<property name="fromAddress">me@x</property>
</properties></connector></destinationConnectors></channel>"#,
    )
    .unwrap();

    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        format!(
            "[input]\nxml_dir = {:?}\n\n[report]\nemail_subject = \"corrected\"\n",
            exports.to_str().unwrap()
        ),
    )
    .unwrap();

    let output = run_cli(&["--config", config.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with(",Mail,,,Channel Reader,,SMTP: smtp:25/me@x>Hi\r\n"));
}
