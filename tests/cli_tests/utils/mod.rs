use std::{
    io::Write,
    process::{Command, Stdio},
};

#[derive(Debug)]
/// Output of a finished hdrlint process.
pub struct HdrlintOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

fn hdrlint() -> Command {
    escargot::CargoBuild::new()
        .package("hdrlint-cli")
        .bin("hdrlint")
        .target_dir("./target/")
        .run()
        .unwrap()
        .command()
}

/// Run any hdrlint cmd, expecting it to succeed.
pub fn run(args: Vec<&'static str>) -> Result<String, Box<dyn std::error::Error>> {
    let output = hdrlint().args(args).stdout(Stdio::piped()).output()?;
    assert!(output.status.success());
    let output = String::from_utf8(output.stdout)?;
    Ok(output)
}

/// Run any hdrlint cmd with the given stdin, whatever its exit code.
pub fn run_with_stdin(
    args: Vec<&'static str>,
    stdin: &[u8],
) -> Result<HdrlintOutput, Box<dyn std::error::Error>> {
    let mut child = hdrlint()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child.stdin.take().unwrap().write_all(stdin)?;
    let output = child.wait_with_output()?;

    Ok(HdrlintOutput {
        code: output.status.code(),
        stdout: String::from_utf8(output.stdout)?,
        stderr: String::from_utf8(output.stderr)?,
    })
}
