pub mod bundle_server;
