use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The entity types that can be imported from and exported to tabular files.
///
/// The string form of each variant is the identifier used in URL paths
/// (`/api/import/{entity_type}`) and as the storage table name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Equipamentos,
    Pocos,
    PlacasOrificio,
    Valvulas,
    Campos,
    TrechosRetos,
    AnalisesQuimicas,
    ControleIncertezas,
    Instalacoes,
    PontosMedicao,
    PlanoCalibracoes,
}

impl EntityType {
    pub const ALL: [EntityType; 11] = [
        EntityType::Equipamentos,
        EntityType::Pocos,
        EntityType::PlacasOrificio,
        EntityType::Valvulas,
        EntityType::Campos,
        EntityType::TrechosRetos,
        EntityType::AnalisesQuimicas,
        EntityType::ControleIncertezas,
        EntityType::Instalacoes,
        EntityType::PontosMedicao,
        EntityType::PlanoCalibracoes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Equipamentos => "equipamentos",
            EntityType::Pocos => "pocos",
            EntityType::PlacasOrificio => "placas_orificio",
            EntityType::Valvulas => "valvulas",
            EntityType::Campos => "campos",
            EntityType::TrechosRetos => "trechos_retos",
            EntityType::AnalisesQuimicas => "analises_quimicas",
            EntityType::ControleIncertezas => "controle_incertezas",
            EntityType::Instalacoes => "instalacoes",
            EntityType::PontosMedicao => "pontos_medicao",
            EntityType::PlanoCalibracoes => "plano_calibracoes",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .iter()
            .find(|e| e.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Tipo de template desconhecido: {}", s))
    }
}
