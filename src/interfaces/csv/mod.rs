pub mod record_reader;
