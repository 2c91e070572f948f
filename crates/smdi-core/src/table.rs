use std::fmt;

/// Join key shared by the four per-material tables.
pub const KEY_COLUMN: &str = "material_id";

/// Logical name of a generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableName {
    Materials,
    EnvironmentalImpact,
    SupplyChainRisk,
    RegulatoryConfidence,
    Scenarios,
}

impl TableName {
    /// Tables in the order they are written.
    pub const ALL: [TableName; 5] = [
        TableName::Materials,
        TableName::EnvironmentalImpact,
        TableName::SupplyChainRisk,
        TableName::RegulatoryConfidence,
        TableName::Scenarios,
    ];

    /// Per-material tables in join order.
    pub const JOINED: [TableName; 4] = [
        TableName::Materials,
        TableName::EnvironmentalImpact,
        TableName::SupplyChainRisk,
        TableName::RegulatoryConfidence,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TableName::Materials => "materials_master",
            TableName::EnvironmentalImpact => "environmental_impact",
            TableName::SupplyChainRisk => "supply_chain_risk",
            TableName::RegulatoryConfidence => "regulatory_confidence",
            TableName::Scenarios => "scenarios",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.csv", self.as_str())
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
