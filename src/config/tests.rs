#[cfg(test)]
mod config_tests {
    use crate::config::{
        default_dessert_price, default_drink_price, default_log_level, default_main_price,
        default_service_name, default_starter_price, Config, ConfigError, ObservabilityConfig,
        PricingConfig,
    };
    use crate::models::FoodCategory;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct EventCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for EventCounter {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn settings(overrides: &[(&str, &str)]) -> config::Config {
        let mut builder = config::Config::builder();
        for (key, value) in overrides {
            builder = builder.set_override(*key, *value).unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_pricing_config_defaults() {
        let config = Config::from_settings(settings(&[])).unwrap();

        assert_eq!(config.pricing.starter_price, dec!(4.40));
        assert_eq!(config.pricing.main_price, dec!(7.00));
        assert_eq!(config.pricing.dessert_price, dec!(3.50));
        assert_eq!(config.pricing.drink_price, dec!(2.00));
        assert_eq!(config.pricing, PricingConfig::default());
    }

    #[test]
    fn test_observability_config_defaults() {
        let config = Config::from_settings(settings(&[])).unwrap();

        assert_eq!(config.observability.service_name, "checkout-rs");
        assert_eq!(config.observability.service_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.enable_json_logging);
        assert_eq!(config.observability, ObservabilityConfig::default());
    }

    #[test]
    fn test_pricing_overrides() {
        let config = Config::from_settings(settings(&[
            ("starter_price", "5.10"),
            ("drink_price", "0"),
        ]))
        .unwrap();

        assert_eq!(config.pricing.starter_price, dec!(5.10));
        assert_eq!(config.pricing.main_price, dec!(7.00));
        assert_eq!(config.pricing.drink_price, dec!(0));
    }

    #[test]
    fn test_observability_overrides() {
        let config = Config::from_settings(settings(&[
            ("service_name", "till-7"),
            ("log_level", "debug"),
            ("enable_json_logging", "true"),
        ]))
        .unwrap();

        assert_eq!(config.observability.service_name, "till-7");
        assert_eq!(config.observability.log_level, "debug");
        assert!(config.observability.enable_json_logging);
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Config::from_settings(settings(&[("main_price", "-1.00")]));

        match result {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains("main"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_price_rejected() {
        let result = Config::from_settings(settings(&[("starter_price", "cheap")]));

        assert!(matches!(result, Err(ConfigError::LoadError { .. })));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let result = Config::from_settings(settings(&[("log_level", "verbose")]));

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_empty_service_name_rejected() {
        let result = Config::from_settings(settings(&[("service_name", "  ")]));

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_price_for_category() {
        let pricing = PricingConfig::default();

        assert_eq!(pricing.price_for(FoodCategory::Starter), default_starter_price());
        assert_eq!(pricing.price_for(FoodCategory::Main), default_main_price());
        assert_eq!(pricing.price_for(FoodCategory::Dessert), default_dessert_price());
        assert_eq!(pricing.price_for(FoodCategory::Drink), default_drink_price());
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_service_name(), "checkout-rs");
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn test_error_display() {
        let error = ConfigError::ValidationError {
            message: "Service name cannot be empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Validation error: Service name cannot be empty"
        );
    }

    #[test]
    fn test_loading_config_emits_no_events() {
        // Configuration is loaded before the subscriber is installed
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(EventCounter(Arc::clone(&count)));

        let config = tracing::subscriber::with_default(subscriber, || {
            Config::from_settings(settings(&[("log_level", "debug")]))
        });

        assert!(config.is_ok());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
