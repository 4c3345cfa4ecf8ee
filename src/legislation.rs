//! Curated legal-reference catalog.
//!
//! The catalog is the fixed library of Portuguese/EU environmental diplomas
//! that analysts cross-reference when drafting compliance narratives. Each
//! diploma carries its mandate summary, jurisdiction level and official link.

use serde::{Deserialize, Serialize};

/// Jurisdiction level of a diploma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    /// National legislation.
    #[serde(rename = "PT")]
    Pt,
    /// European Union legislation.
    #[serde(rename = "UE")]
    Ue,
    /// National transposition of an EU framework.
    #[serde(rename = "PT/UE")]
    PtUe,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Level::Pt => "PT",
            Level::Ue => "UE",
            Level::PtUe => "PT/UE",
        })
    }
}

/// One diploma of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalReference {
    pub title: String,
    /// What the diploma mandates, in one or two sentences.
    pub mandate: String,
    pub level: Level,
    pub link: String,
}

/// A thematic group of diplomas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalCategory {
    pub name: String,
    pub references: Vec<LegalReference>,
}

fn reference(title: &str, mandate: &str, level: Level, link: &str) -> LegalReference {
    LegalReference {
        title: title.to_string(),
        mandate: mandate.to_string(),
        level,
        link: link.to_string(),
    }
}

/// The full catalog, grouped by theme.
pub fn library() -> Vec<LegalCategory> {
    vec![
        LegalCategory {
            name: "0. Estratégia, Clima & Biodiversidade".to_string(),
            references: vec![
                reference(
                    "Lei de Bases do Clima (Lei n.º 98/2021)",
                    "Vincula Portugal à neutralidade carbónica em 2050. Cria orçamentos de \
                     carbono e obriga a testes de impacto climático na legislação.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/detalhe/lei/98-2021-176905537",
                ),
                reference(
                    "Regulamento do Restauro da Natureza (UE) 2024/1991",
                    "Meta vinculativa de restaurar 20% das áreas terrestres/marítimas da UE \
                     até 2030. Foco crítico em ecossistemas agrícolas e turfeiras.",
                    Level::Ue,
                    "https://eur-lex.europa.eu/eli/reg/2024/1991/oj",
                ),
                reference(
                    "PNEC 2030 - Plano Nacional Energia e Clima",
                    "Metas nacionais para redução de emissões (55%), renováveis (85% na \
                     eletricidade) e eficiência energética para a década 2021-2030.",
                    Level::Pt,
                    "https://apambiente.pt/clima/pnec-2030",
                ),
                reference(
                    "Estratégia do Prado ao Prato (Farm to Fork)",
                    "Meta UE: Reduzir 50% pesticidas, 20% fertilizantes e atingir 25% de \
                     agricultura biológica até 2030.",
                    Level::Ue,
                    "https://food.ec.europa.eu/horizontal-topics/farm-fork-strategy_pt",
                ),
            ],
        },
        LegalCategory {
            name: "1. Regimes Transversais de Licenciamento".to_string(),
            references: vec![
                reference(
                    "RJAIA - Regime Jurídico AIA (DL 151-B/2013 na redação atual)",
                    "Obriga à avaliação de impacte ambiental de projetos. Define prazos, \
                     tramitação e necessidade de Declaração de Impacte Ambiental (DIA).",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/2013-116043164",
                ),
                reference(
                    "SIMPLEX AMBIENTAL (DL 11/2023 - Versão Consolidada)",
                    "Elimina licenças e atos administrativos desnecessários. Altera regras \
                     de AIA e licenciamento hídrico.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/detalhe/decreto-lei/11-2023-207604364",
                ),
                reference(
                    "LUA - Licenciamento Único (DL 75/2015 na redação atual)",
                    "Cria o Título Único Ambiental (TUA). Agrega todas as licenças \
                     ambientais num único ato administrativo.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/2015-106567543",
                ),
                reference(
                    "Rede Natura 2000 (DL 140/99 consolidado)",
                    "Transpõe Diretivas Aves e Habitats. Protege Zonas Especiais de \
                     Conservação e ZPE. Proíbe a deterioração de habitats.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/1999-34460975",
                ),
                reference(
                    "Responsabilidade Ambiental (DL 147/2008)",
                    "Princípio do poluidor-pagador. Obriga operadores a constituir garantias \
                     financeiras para reparação de danos ambientais.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/2008-34484567",
                ),
            ],
        },
        LegalCategory {
            name: "2. Agricultura, Floresta & Solos".to_string(),
            references: vec![
                reference(
                    "PEPAC Portugal (2023-2027)",
                    "Plano Estratégico da PAC. Define Eco-regimes e medidas agroambientais. \
                     Estabelece a 'Condicionalidade Reforçada'.",
                    Level::PtUe,
                    "https://www.gpp.pt/index.php/pepac/pepac-2023-2027",
                ),
                reference(
                    "Regulamento Desflorestação (EUDR) 2023/1115",
                    "Proíbe produtos (madeira, soja, bovinos) ligados à desflorestação no \
                     mercado da UE. Exige geolocalização das parcelas.",
                    Level::Ue,
                    "https://eur-lex.europa.eu/eli/reg/2023/1115/oj",
                ),
                reference(
                    "Lei de Bases da Política Florestal (Lei n.º 33/96)",
                    "Define os princípios da gestão florestal sustentável, PROFs e ZIFs.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/detalhe/lei/33-1996-224426",
                ),
                reference(
                    "Sistema Defesa Floresta (DL 124/2006 atualizado)",
                    "Medidas de defesa contra incêndios (DFCI), incluindo faixas de gestão \
                     de combustível e limpeza de terrenos.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/2006-34493356",
                ),
                reference(
                    "NREAP - Pecuária (DL 81/2013 consolidado)",
                    "Novo Regime do Exercício da Atividade Pecuária. Licenciamento de \
                     explorações e gestão de efluentes.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/2013-34766868",
                ),
                reference(
                    "Arborização (DL 96/2013 RJAAR)",
                    "Regime jurídico das ações de arborização. Protege espécies como \
                     sobreiro e azinheira.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/2013-116043321",
                ),
            ],
        },
        LegalCategory {
            name: "3. Água & Saneamento".to_string(),
            references: vec![
                reference(
                    "Lei da Água (Lei 58/2005 e DL 226-A/2007)",
                    "Lei quadro da gestão de recursos hídricos (DQA) e regime de utilização \
                     (TURH).",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/lei/2005-34563267",
                ),
                reference(
                    "Diretiva Nitratos (91/676/CEE)",
                    "Proteção das águas contra poluição por nitratos de origem agrícola. \
                     Define 'Zonas Vulneráveis' e Códigos de Boas Práticas.",
                    Level::Ue,
                    "https://eur-lex.europa.eu/legal-content/PT/TXT/?uri=CELEX:31991L0676",
                ),
                reference(
                    "Qualidade Água Consumo (DL 306/2007 consolidado)",
                    "Regime da qualidade da água para consumo humano. Transpõe Diretiva \
                     (UE) 2020/2184.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/2007-34512233",
                ),
                reference(
                    "Segurança Barragens (DL 21/2018)",
                    "Regulamento de Segurança de Barragens. Normas de projeto, construção e \
                     exploração.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/2018-114833256",
                ),
            ],
        },
        LegalCategory {
            name: "4. Energia & Indústria".to_string(),
            references: vec![
                reference(
                    "Sistema Elétrico (DL 15/2022)",
                    "Organização do Sistema Elétrico Nacional (SEN). Regula produção, \
                     autoconsumo e comunidades de energia.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/2022-177343687",
                ),
                reference(
                    "Gases Renováveis/H2 (DL 62/2020)",
                    "Organização do Sistema Nacional de Gás. Hidrogénio Verde e biometano.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/2020-141445587",
                ),
                reference(
                    "Emissões Industriais (DL 127/2013 - REI)",
                    "Regime de Emissões Industriais. Transpõe a Diretiva IED (Prevenção e \
                     Controlo Integrados da Poluição).",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/2013-34789569",
                ),
                reference(
                    "Seveso III (DL 150/2015)",
                    "Prevenção de acidentes graves com substâncias perigosas.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/2015-106558967",
                ),
            ],
        },
        LegalCategory {
            name: "5. Território & Urbanismo".to_string(),
            references: vec![
                reference(
                    "RJUE (DL 555/99 consolidado)",
                    "Regime Jurídico da Urbanização e Edificação. Controlo prévio de \
                     operações urbanísticas.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/1999-34563452",
                ),
                reference(
                    "RAN - Reserva Agrícola (DL 73/2009)",
                    "Protege solos de maior aptidão agrícola. Restringe construções \
                     não-agrícolas.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/detalhe/decreto-lei/73-2009-540266",
                ),
                reference(
                    "REN - Reserva Ecológica (DL 166/2008)",
                    "Estrutura biofísica fundamental. Protege dunas, leitos de cheia e \
                     arribas.",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/decreto-lei/2008-34512221",
                ),
                reference(
                    "Bases Recursos Geológicos (Lei 54/2015)",
                    "Bases do regime jurídico dos recursos geológicos (Minas e Pedreiras).",
                    Level::Pt,
                    "https://diariodarepublica.pt/dr/legislacao-consolidada/lei/2015-107567789",
                ),
            ],
        },
    ]
}

/// Case-insensitive search over titles and mandates.
pub fn search(query: &str) -> Vec<LegalReference> {
    let needle = query.to_lowercase();
    library()
        .into_iter()
        .flat_map(|category| category.references)
        .filter(|r| {
            r.title.to_lowercase().contains(&needle) || r.mandate.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Render references into the plain-text context block embedded in
/// narrative-generation requests.
pub fn context_block(references: &[LegalReference]) -> String {
    let mut block = String::new();
    for r in references {
        block.push_str(&format!(
            ">>> {} [{}] <<<\n{}\nFonte: {}\n\n",
            r.title, r.level, r.mandate, r.link
        ));
    }
    block
}
