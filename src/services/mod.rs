// Services module - business logic layer

pub mod checkout_service;

pub use checkout_service::CheckoutService;
