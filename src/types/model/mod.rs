// Domain entities and their create/patch inputs
pub mod product;
pub mod user;

pub use product::{NewProduct, Product, ProductPatch};
pub use user::{NewUser, User, UserPatch};
