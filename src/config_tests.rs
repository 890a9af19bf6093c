//! Tests for configuration

#[cfg(test)]
mod tests {
    use super::super::config::*;
    use std::io::Write;

    #[test]
    fn test_advisor_settings_defaults() {
        let config: AdvisorSettings = toml::from_str("").unwrap();
        assert_eq!(config.max_opportunities, 3);
    }

    #[test]
    fn test_optimizer_settings_defaults() {
        let config: OptimizerSettings = toml::from_str("").unwrap();
        assert_eq!(config.trials, 1000);
        assert_eq!(config.risk_free_rate, 0.03);
        assert_eq!(config.min_weight, 0.0);
        assert_eq!(config.max_weight, 1.0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_optimizer_settings_overrides() {
        let toml_str = r#"
trials = 5000
risk_free_rate = 0.05
min_weight = 0.05
max_weight = 0.6
seed = 42
"#;
        let config: OptimizerSettings = toml::from_str(toml_str).unwrap();
        assert_eq!(config.trials, 5000);
        assert_eq!(config.risk_free_rate, 0.05);
        assert_eq!(config.min_weight, 0.05);
        assert_eq!(config.max_weight, 0.6);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_optimizer_settings_to_monte_carlo() {
        let toml_str = r#"
trials = 200
min_weight = 0.1
max_weight = 0.9
"#;
        let config: OptimizerSettings = toml::from_str(toml_str).unwrap();
        let mc = config.to_monte_carlo();
        assert_eq!(mc.trials, 200);
        assert_eq!(mc.bounds.min, 0.1);
        assert_eq!(mc.bounds.max, 0.9);
    }

    #[test]
    fn test_monitor_settings_defaults() {
        let config: MonitorSettings = toml::from_str("").unwrap();
        assert_eq!(config.poll_interval_secs, 300);
        assert_eq!(config.poll_interval().as_secs(), 300);
    }

    #[test]
    fn test_full_config_empty_file_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.optimizer.trials, 1000);
        assert_eq!(config.monitor.poll_interval_secs, 300);
        assert_eq!(config.advisor.max_opportunities, 3);
    }

    #[test]
    fn test_full_config_sections() {
        let toml_str = r#"
[advisor]
max_opportunities = 5

[optimizer]
trials = 250

[monitor]
poll_interval_secs = 60
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.advisor.max_opportunities, 5);
        assert_eq!(config.optimizer.trials, 250);
        assert_eq!(config.monitor.poll_interval_secs, 60);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[optimizer]\ntrials = 321").unwrap();

        let path = file.path().to_str().unwrap();
        // config::File::with_name wants the stem without extension
        let stem = path.trim_end_matches(".toml");
        let config = Config::load(stem).unwrap();
        assert_eq!(config.optimizer.trials, 321);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/baobab-config").unwrap();
        assert_eq!(config.optimizer.trials, 1000);
    }
}
