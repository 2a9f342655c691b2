//! Static template definitions for every importable entity type.
//!
//! Column order here is the order written to template and export files.
//! Headers carry a `*` suffix on required columns; that marker is part of
//! the header text the operator sees.

use super::{FieldKind, FieldSpec, TemplateDescriptor};
use common::model::entity::EntityType;

const fn req(header: &'static str, field: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        header,
        field,
        kind,
        required: true,
    }
}

const fn opt(header: &'static str, field: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        header,
        field,
        kind,
        required: false,
    }
}

use FieldKind::{Date, Integer, Number, Options, Text};

fn equipamentos() -> TemplateDescriptor {
    TemplateDescriptor {
        entity: EntityType::Equipamentos,
        name: "Equipamentos",
        fields: vec![
            req("TAG*", "tag", Text),
            req("Nome*", "nome", Text),
            req(
                "Tipo*",
                "tipo",
                Options(&[
                    "Medidor de Vazão",
                    "Transmissor de Pressão",
                    "Transmissor de Temperatura",
                    "Analisador",
                    "Cromatógrafo",
                    "Densímetro",
                    "Outro",
                ]),
            ),
            opt("Fabricante", "fabricante", Text),
            opt("Modelo", "modelo", Text),
            opt("Número de Série", "numeroSerie", Text),
            req("Polo ID*", "poloId", Integer),
            req("Instalação ID*", "instalacaoId", Integer),
            opt("Unidade Medida", "unidadeMedida", Text),
            opt("Resolução", "resolucao", Number),
            opt("Faixa Min Equipamento", "faixaMinEquipamento", Number),
            opt("Faixa Max Equipamento", "faixaMaxEquipamento", Number),
            opt("Faixa Min PAM", "faixaMinPam", Number),
            opt("Faixa Max PAM", "faixaMaxPam", Number),
            opt("Faixa Min Calibrada", "faixaMinCalibrada", Number),
            opt("Faixa Max Calibrada", "faixaMaxCalibrada", Number),
            opt(
                "Condições Ambientais Operação",
                "condicoesAmbientaisOperacao",
                Text,
            ),
            opt("Software Versão", "softwareVersao", Text),
            opt("Classificação", "classificacao", Text),
            opt("Frequência Calibração ANP", "frequenciaCalibracao", Integer),
            opt("Ativo MXM", "ativoMxm", Text),
            opt("Plano Manutenção", "planoManutencao", Text),
            opt("Critério Aceitação", "criterioAceitacao", Text),
            opt("Erro Máximo Admissível", "erroMaximoAdmissivel", Number),
            req(
                "Status Operacional*",
                "statusOperacional",
                Options(&[
                    "Em Operação",
                    "Fora de Operação",
                    "Em Calibração",
                    "Em Manutenção",
                    "Fora de Uso",
                    "Sobressalente",
                ]),
            ),
            req(
                "Status*",
                "status",
                Options(&["ativo", "inativo", "manutencao", "descartado"]),
            ),
        ],
        unique: &["tag"],
    }
}

fn pocos() -> TemplateDescriptor {
    TemplateDescriptor {
        entity: EntityType::Pocos,
        name: "Poços",
        fields: vec![
            req("Código*", "codigo", Text),
            req("Nome*", "nome", Text),
            opt("Código ANP", "codigoAnp", Text),
            req("Tipo*", "tipo", Options(&["produtor", "injetor", "observacao"])),
            req("Polo ID*", "poloId", Integer),
            req("Instalação ID*", "instalacaoId", Integer),
            opt("Campo ID", "campoId", Integer),
            req(
                "Status*",
                "status",
                Options(&["ativo", "inativo", "suspenso", "abandonado"]),
            ),
            opt("Frequência Teste (dias)", "frequenciaTesteDias", Integer),
            opt("Observações", "observacoes", Text),
        ],
        unique: &["codigo"],
    }
}

fn placas_orificio() -> TemplateDescriptor {
    TemplateDescriptor {
        entity: EntityType::PlacasOrificio,
        name: "Placas de Orifício",
        fields: vec![
            req("Equipamento ID*", "equipamentoId", Integer),
            req("Carta Número*", "cartaNumero", Text),
            req("Diâmetro Orifício (mm)*", "diametroOrificio", Number),
            req("Diâmetro Tubulação (mm)*", "diametroTubulacao", Number),
            opt("Material", "material", Text),
            opt("Espessura (mm)", "espessura", Number),
            opt(
                "Tipo Tomada",
                "tipoTomada",
                Options(&["flange", "corner", "d_d2", "pipe"]),
            ),
            opt("Beta Ratio", "betaRatio", Number),
            opt("Data Inspeção", "dataInspecao", Date),
            req(
                "Status*",
                "status",
                Options(&["ativo", "inativo", "manutencao", "descartado"]),
            ),
        ],
        unique: &["cartaNumero"],
    }
}

fn valvulas() -> TemplateDescriptor {
    TemplateDescriptor {
        entity: EntityType::Valvulas,
        name: "Válvulas",
        fields: vec![
            req("TAG*", "tag", Text),
            req("Equipamento ID*", "equipamentoId", Integer),
            req(
                "Tipo Válvula*",
                "tipoValvula",
                Options(&[
                    "controle",
                    "bloqueio",
                    "alivio",
                    "retencao",
                    "esfera",
                    "gaveta",
                    "borboleta",
                ]),
            ),
            opt("Fabricante", "fabricante", Text),
            opt("Modelo", "modelo", Text),
            opt("Tamanho (pol)", "tamanho", Number),
            opt("Classe Pressão", "classePressao", Text),
            opt("Material Corpo", "materialCorpo", Text),
            opt("Material Sede", "materialSede", Text),
            opt(
                "Tipo Atuador",
                "tipoAtuador",
                Options(&["pneumatico", "eletrico", "hidraulico", "manual"]),
            ),
            req(
                "Status*",
                "status",
                Options(&["ativo", "inativo", "manutencao"]),
            ),
            opt("Observações", "observacoes", Text),
        ],
        unique: &["tag"],
    }
}

fn campos() -> TemplateDescriptor {
    TemplateDescriptor {
        entity: EntityType::Campos,
        name: "Campos",
        fields: vec![
            req("Nome*", "nome", Text),
            req("Sigla*", "sigla", Text),
            req("Polo ID*", "poloId", Integer),
            opt("Código ANP", "codigoAnp", Text),
            opt(
                "Tipo Produção",
                "tipoProducao",
                Options(&["onshore", "offshore"]),
            ),
            opt("Localização", "localizacao", Text),
            req(
                "Status*",
                "status",
                Options(&["ativo", "inativo", "em_desenvolvimento"]),
            ),
            opt("Observações", "observacoes", Text),
        ],
        unique: &[],
    }
}

fn trechos_retos() -> TemplateDescriptor {
    TemplateDescriptor {
        entity: EntityType::TrechosRetos,
        name: "Trechos Retos",
        fields: vec![
            req("TAG*", "tag", Text),
            req("Equipamento ID*", "equipamentoId", Integer),
            opt("Campo ID", "campoId", Integer),
            req("Instalação ID*", "instalacaoId", Integer),
            req(
                "Tipo Trecho*",
                "tipoTrecho",
                Options(&["reto", "curva", "reducao", "expansao"]),
            ),
            opt("Comprimento Montante (D)", "comprimentoMontante", Number),
            opt("Comprimento Jusante (D)", "comprimentoJusante", Number),
            req("Diâmetro Nominal (mm)*", "diametroNominal", Number),
            opt("Material", "material", Text),
            opt("Tipo Tomada", "tipoTomada", Text),
            opt("Beta Ratio", "betaRatio", Number),
            opt("Retificador Fluxo", "retificadorFluxo", Options(&["sim", "nao"])),
            req(
                "Status*",
                "statusConformidade",
                Options(&["conforme", "nao_conforme", "em_analise"]),
            ),
            opt("Observações", "observacoes", Text),
        ],
        unique: &["tag"],
    }
}

fn analises_quimicas() -> TemplateDescriptor {
    TemplateDescriptor {
        entity: EntityType::AnalisesQuimicas,
        name: "Análises Químicas",
        fields: vec![
            req("Plano Coleta ID*", "planoColetaId", Integer),
            req("Ponto Medição ID*", "pontoMedicaoId", Integer),
            req("Data Coleta*", "dataColeta", Date),
            opt("Data Análise", "dataAnalise", Date),
            opt("Densidade (kg/m³)", "densidade", Number),
            opt("Poder Calorífico (kcal/kg)", "poderCalorifico", Number),
            opt("Teor CO2 (%)", "teorCo2", Number),
            opt("Teor H2S (ppm)", "teorH2s", Number),
            opt("Teor N2 (%)", "teorN2", Number),
            opt("Teor C1 (%)", "teorC1", Number),
            opt("Teor C2 (%)", "teorC2", Number),
            opt("Teor C3 (%)", "teorC3", Number),
            opt("Viscosidade (cP)", "viscosidade", Number),
            opt("Laboratório", "laboratorio", Text),
            req(
                "Status Análise*",
                "statusAnalise",
                Options(&["pendente", "coletado", "laboratorio", "concluido", "rejeitado"]),
            ),
            opt("Observações", "observacoes", Text),
        ],
        unique: &[],
    }
}

fn controle_incertezas() -> TemplateDescriptor {
    TemplateDescriptor {
        entity: EntityType::ControleIncertezas,
        name: "Controle de Incertezas",
        fields: vec![
            req("Ponto Medição ID*", "pontoMedicaoId", Integer),
            opt("Polo ID", "poloId", Integer),
            opt("Instalação ID", "instalacaoId", Integer),
            req("TAG Ponto*", "tagPontoInstalacao", Text),
            req("Data Execução*", "dataExecucao", Date),
            opt("Número Certificado", "numeroCertificado", Text),
            opt("Vazão Volumétrica (m³/h)", "vazaoVolumetrica", Number),
            opt("Incerteza Expandida", "incertezaExpandida", Number),
            req(
                "Incerteza Expandida Relativa (%)*",
                "incertezaExpandidaRelativa",
                Number,
            ),
            req("Critério Aceitação (%)*", "criterioAceitacao", Number),
            req(
                "Classificação*",
                "classificacao",
                Options(&["fiscal", "apropriacao", "operacional"]),
            ),
            req(
                "Resultado*",
                "resultado",
                Options(&["aprovado", "reprovado", "condicional"]),
            ),
            opt("Conforme Limite", "conformeLimite", Options(&["true", "false"])),
            req(
                "Status*",
                "status",
                Options(&["pendente", "em_analise", "concluido", "rejeitado"]),
            ),
            opt("Observação", "observacao", Text),
        ],
        unique: &[],
    }
}

fn instalacoes() -> TemplateDescriptor {
    TemplateDescriptor {
        entity: EntityType::Instalacoes,
        name: "Instalações",
        fields: vec![
            req("Nome*", "nome", Text),
            req("Sigla*", "sigla", Text),
            req("Polo ID*", "poloId", Integer),
            req(
                "Tipo*",
                "tipo",
                Options(&[
                    "plataforma",
                    "fpso",
                    "manifold",
                    "estacao_terrestre",
                    "ups",
                    "refinaria",
                ]),
            ),
            opt("Código ANP", "codigoAnp", Text),
            opt("Localização", "localizacao", Text),
            req(
                "Status*",
                "status",
                Options(&["ativo", "inativo", "manutencao", "descomissionado"]),
            ),
            opt("Observações", "observacoes", Text),
        ],
        unique: &[],
    }
}

fn pontos_medicao() -> TemplateDescriptor {
    TemplateDescriptor {
        entity: EntityType::PontosMedicao,
        name: "Pontos de Medição",
        fields: vec![
            req("Equipamento ID*", "equipamentoId", Integer),
            req("TAG*", "tag", Text),
            req(
                "Tipo Medição*",
                "tipoMedicao",
                Options(&["vazao", "pressao", "temperatura", "densidade", "nivel", "composicao"]),
            ),
            req(
                "Fluido Medido*",
                "fluidoMedido",
                Options(&["gas_natural", "oleo", "agua", "condensado", "gnl", "glp"]),
            ),
            req(
                "Função Medição*",
                "funcaoMedicao",
                Options(&["fiscal", "apropriacao", "operacional", "transferencia_custodia"]),
            ),
            opt("Polo ID", "poloId", Integer),
            opt("Instalação ID", "instalacaoId", Integer),
            opt("Campo ID", "campoId", Integer),
            opt("Unidade Medição", "unidadeMedicao", Text),
            opt("Faixa Medição", "faixaMedicao", Text),
            opt("Pressão Operação (bar)", "pressaoOperacao", Number),
            opt("Temperatura Operação (°C)", "temperaturaOperacao", Number),
            req(
                "Status*",
                "status",
                Options(&["ativo", "inativo", "manutencao", "calibracao"]),
            ),
            opt("Observações", "observacoes", Text),
        ],
        unique: &[],
    }
}

fn plano_calibracoes() -> TemplateDescriptor {
    TemplateDescriptor {
        entity: EntityType::PlanoCalibracoes,
        name: "Plano de Calibrações",
        fields: vec![
            req("Equipamento ID*", "equipamentoId", Integer),
            opt("Data Última Calibração", "dataUltimaCalibracao", Date),
            req("Data Próxima Calibração*", "dataProximaCalibracao", Date),
            opt("Dias Para Vencer", "diasParaVencer", Integer),
            req(
                "Status Calibração*",
                "statusCalibracao",
                Options(&[
                    "pendente",
                    "agendado",
                    "em_execucao",
                    "conforme",
                    "nao_conforme",
                    "vencido",
                ]),
            ),
            opt("Certificado Calibração", "certificadoCalibracao", Text),
            opt("Laboratório", "laboratorio", Text),
            opt("Responsável Técnico", "responsavelTecnico", Text),
            opt("Observações", "observacoes", Text),
        ],
        unique: &[],
    }
}

pub(super) fn all() -> Vec<TemplateDescriptor> {
    vec![
        equipamentos(),
        pocos(),
        placas_orificio(),
        valvulas(),
        campos(),
        trechos_retos(),
        analises_quimicas(),
        controle_incertezas(),
        instalacoes(),
        pontos_medicao(),
        plano_calibracoes(),
    ]
}
