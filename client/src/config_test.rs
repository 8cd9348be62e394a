use super::*;

#[test]
fn default_config_points_at_the_public_instance() {
    let defaults = default_config();
    assert!(!defaults.instance_url.is_empty());
    assert_eq!(defaults.days_back, DEFAULT_DAYS_BACK);
}
