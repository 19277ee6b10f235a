mod migrate;
mod routes;

pub use migrate::handle_migrate_command;
pub use routes::handle_routes_command;
