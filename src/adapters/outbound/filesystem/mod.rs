pub mod descriptor_reader;
pub mod file_writer;

pub use descriptor_reader::{FileSystemSourceReader, DESCRIPTOR_FILENAME};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
