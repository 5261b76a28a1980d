//! Remote chat gateway implementations.

pub mod edge_function_gateway;

pub use edge_function_gateway::EdgeFunctionGateway;
