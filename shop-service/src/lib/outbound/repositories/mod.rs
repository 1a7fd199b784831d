pub mod order;
pub mod product;
pub mod user;

pub use order::PostgresOrderRepository;
pub use product::PostgresProductRepository;
pub use user::PostgresUserRepository;
