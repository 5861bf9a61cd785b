pub mod http_header;
