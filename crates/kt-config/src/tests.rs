//! Unit tests for kt-config.

use std::io::Cursor;

use crate::{ConfigError, TemplarConfig, load_reader};

fn parse(json: &str) -> Result<TemplarConfig, ConfigError> {
    load_reader(Cursor::new(json))
}

// ── Defaults and validation ───────────────────────────────────────────────────

#[cfg(test)]
mod defaults {
    use super::*;

    #[test]
    fn default_record_matches_shipped_values() {
        let c = TemplarConfig::default();
        assert_eq!((c.min_agents, c.max_agents), (4, 10));
        assert_eq!(c.event_interval_secs, 3600.0);
        assert_eq!(c.event_duration_secs, 1800.0);
        assert_eq!(c.aggro_range, 20.0);
        assert_eq!(c.allowed_weapons, ["minicrossbow", "bow.compound", "crossbow", "mace"]);
        assert_eq!(c.loot_table.get("scrap"), Some(50));
        assert_eq!(c.loot_table.total_weight(), 151);
        assert_eq!(c.armor.len(), 4);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn armor_items_are_values_only() {
        let c = TemplarConfig::default();
        let items: Vec<&str> = c.armor_items().collect();
        assert!(items.contains(&"metal.facemask"));
        assert!(!items.contains(&"head"));
    }

    #[test]
    fn inverted_agent_range_rejected() {
        let c = TemplarConfig { min_agents: 5, max_agents: 4, ..Default::default() };
        assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn empty_weapon_list_rejected() {
        let c = TemplarConfig { allowed_weapons: vec![], ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn accuracy_outside_unit_interval_rejected() {
        let c = TemplarConfig { accuracy: 1.5, ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_loot_weight_rejected() {
        let mut c = TemplarConfig::default();
        c.loot_table.0.insert("stones".into(), 0);
        assert!(c.validate().is_err());
    }

    #[test]
    fn non_positive_timing_rejected() {
        let c = TemplarConfig { event_interval_secs: 0.0, ..Default::default() };
        assert!(c.validate().is_err());
        let c = TemplarConfig { event_duration_secs: -1.0, ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn duration_longer_than_interval_is_allowed() {
        let c = TemplarConfig {
            event_interval_secs: 60.0,
            event_duration_secs: 600.0,
            ..Default::default()
        };
        assert!(c.validate().is_ok());
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parsing {
    use super::*;

    #[test]
    fn plugin_style_keys() {
        let c = parse(
            r#"{
                "MinNPCs": 2,
                "MaxNPCs": 3,
                "EventInterval": 120.0,
                "EventDuration": 60.0,
                "AggroRange": 15.5,
                "Accuracy": 0.5,
                "NPCPrefab": "assets/knight.prefab",
                "AllowedWeapons": ["bow", "crossbow"],
                "LootTable": { "scrap": 10 },
                "Armor": { "head": "helm" }
            }"#,
        )
        .unwrap();
        assert_eq!((c.min_agents, c.max_agents), (2, 3));
        assert_eq!(c.aggro_range, 15.5);
        assert_eq!(c.agent_prefab, "assets/knight.prefab");
        assert_eq!(c.allowed_weapons, ["bow", "crossbow"]);
        assert_eq!(c.loot_table.len(), 1);
        assert_eq!(c.armor.get("head").map(String::as_str), Some("helm"));
    }

    #[test]
    fn snake_case_aliases() {
        let c = parse(r#"{ "min_agents": 1, "max_agents": 1, "aggro_range": 5.0 }"#).unwrap();
        assert_eq!((c.min_agents, c.max_agents), (1, 1));
        assert_eq!(c.aggro_range, 5.0);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let c = parse(r#"{ "MaxNPCs": 12 }"#).unwrap();
        assert_eq!(c.max_agents, 12);
        assert_eq!(c.min_agents, 4);
        assert_eq!(c.armor, TemplarConfig::default().armor);
    }

    #[test]
    fn null_document_is_default() {
        assert_eq!(parse("null").unwrap(), TemplarConfig::default());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(parse("{ MinNPCs: "), Err(ConfigError::Json(_))));
    }

    #[test]
    fn parsed_record_is_validated() {
        assert!(matches!(
            parse(r#"{ "MinNPCs": 9, "MaxNPCs": 3 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn serialises_with_plugin_keys() {
        let json = serde_json::to_string(&TemplarConfig::default()).unwrap();
        assert!(json.contains("\"MinNPCs\":4"));
        assert!(json.contains("\"NPCPrefab\""));
        assert!(!json.contains("min_agents"));
    }
}

// ── File store ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use tempfile::TempDir;

    use crate::{ConfigError, TemplarConfig, load, load_or_init, save};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tmp();
        let result = load(&dir.path().join("KnightsTemplar.json"));
        assert!(matches!(result, Err(ConfigError::Unavailable(_))));
    }

    #[test]
    fn first_run_materialises_defaults() {
        let dir = tmp();
        let path = dir.path().join("config").join("KnightsTemplar.json");
        let c = load_or_init(&path).unwrap();
        assert_eq!(c, TemplarConfig::default());
        assert!(path.exists());
        assert_eq!(load(&path).unwrap(), c);
    }

    #[test]
    fn existing_file_is_not_overwritten() {
        let dir = tmp();
        let path = dir.path().join("KnightsTemplar.json");
        let custom = TemplarConfig { min_agents: 1, max_agents: 2, ..Default::default() };
        save(&path, &custom).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        assert_eq!(load_or_init(&path).unwrap(), custom);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn corrupt_file_is_left_alone() {
        let dir = tmp();
        let path = dir.path().join("KnightsTemplar.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(load_or_init(&path), Err(ConfigError::Json(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }
}
