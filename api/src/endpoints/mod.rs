//! Endpoint clients, one per backend resource
//!
//! Paths reproduce the backend contract verbatim, including the mixed
//! `/api`-prefixed (sales, logs) and unprefixed (everything else) routes.

mod alertas;
mod auth;
mod categorias;
mod clientes;
mod estoque;
mod logs;
mod medicamentos;
mod vendas;

pub use alertas::AlertasApi;
pub use auth::AuthApi;
pub use categorias::CategoriasApi;
pub use clientes::ClientesApi;
pub use estoque::EstoqueApi;
pub use logs::LogsApi;
pub use medicamentos::MedicamentosApi;
pub use vendas::VendasApi;
