pub mod frenchkit;
