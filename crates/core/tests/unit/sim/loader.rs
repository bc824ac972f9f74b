//! Loader Tests.
//!
//! Images are read from real files in a temporary directory, with and without
//! the version header.

use std::io::Write;

use ringvm_core::common::VmError;
use ringvm_core::common::constants::BYTECODE_VERSION;
use ringvm_core::sim::loader::{IMAGE_MAGIC, load_binary, load_program};
use ringvm_core::{Config, Simulator};
use tempfile::NamedTempFile;

use crate::common::builder::program::{ProgramBuilder, imm, reg};

fn image_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn raw_binary_is_read_verbatim() {
    let file = image_file(&[1, 2, 3]);
    assert_eq!(load_binary(file.path()).unwrap(), vec![1, 2, 3]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_binary(dir.path().join("absent.bin")),
        Err(VmError::Io(_))
    ));
}

#[test]
fn versioned_image_runs() {
    let program = ProgramBuilder::new().ld(reg("AB"), imm(0xBEEF, 2)).brk();
    let mut image = IMAGE_MAGIC.to_vec();
    image.push(BYTECODE_VERSION);
    image.extend(program.build());
    let file = image_file(&image);

    assert_eq!(load_program(file.path()).unwrap(), program.build());

    let mut sim = Simulator::new(&Config::default());
    sim.load_program_file(file.path()).unwrap();
    sim.run().unwrap();
    assert_eq!(sim.get_wide(0, 2), 0xBEEF);
}

#[test]
fn wrong_version_is_rejected() {
    let mut image = IMAGE_MAGIC.to_vec();
    image.push(BYTECODE_VERSION + 1);
    image.push(0x00);
    let file = image_file(&image);
    assert!(matches!(
        load_program(file.path()),
        Err(VmError::InvalidConfig(_))
    ));
}
