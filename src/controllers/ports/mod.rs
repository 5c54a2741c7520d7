pub mod file_presenter;
