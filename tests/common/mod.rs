//! Synthetic detail pages laid out like pokemondb.net
#![allow(dead_code)]

use url::Url;

pub const FIXTURE_URL: &str = "https://pokemondb.net/pokedex/charizard";

pub fn charizard_page() -> &'static str {
    include_str!("../fixtures/charizard.html")
}

pub fn url(path: &str) -> Url {
    Url::parse("https://pokemondb.net")
        .and_then(|base| base.join(path))
        .expect("valid url")
}

/// Field values of one variant block
#[derive(Debug, Clone)]
pub struct Block {
    pub index: String,
    pub types: Vec<String>,
    pub species: String,
    pub height: String,
    pub weight: String,
    pub abilities: Vec<String>,
    pub local: Vec<(String, String)>,
    pub training: Vec<(String, String)>,
    pub breeding: Vec<(String, String)>,
    pub stats: Vec<(String, String)>,
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

impl Block {
    pub fn bulbasaur() -> Self {
        Self {
            index: "0001".to_string(),
            types: vec!["Grass".to_string(), "Poison".to_string()],
            species: "Seed Pokémon".to_string(),
            height: "0.7 m (2′04″)".to_string(),
            weight: "6.9 kg (15.2 lbs)".to_string(),
            abilities: vec!["Overgrow".to_string(), "Chlorophyll".to_string()],
            local: owned(&[("0001", "(Red/Blue/Yellow)"), ("0226", "(Gold/Silver/Crystal)")]),
            training: owned(&[("EV yield", "1 Special Attack"), ("Catch rate", "45")]),
            breeding: owned(&[("Egg Groups", "Grass, Monster"), ("Egg cycles", "20")]),
            stats: owned(&[
                ("HP", "45"),
                ("Attack", "49"),
                ("Defense", "49"),
                ("Sp. Atk", "65"),
                ("Sp. Def", "65"),
                ("Speed", "45"),
            ]),
        }
    }

    pub fn with_index(mut self, index: &str) -> Self {
        self.index = index.to_string();
        self
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| (*t).to_string()).collect();
        self
    }

    fn render(&self) -> String {
        let types: String = self
            .types
            .iter()
            .map(|t| format!(r#"<a class="type-icon">{t}</a> "#))
            .collect();
        let abilities: String = self
            .abilities
            .iter()
            .enumerate()
            .map(|(i, a)| format!(r#"<span class="text-muted">{}. <a>{a}</a></span><br>"#, i + 1))
            .collect();
        let local = self
            .local
            .iter()
            .map(|(n, r)| format!(r#"{n} <small class="text-muted">{r}</small>"#))
            .collect::<Vec<_>>()
            .join("<br>");
        let rows = |pairs: &[(String, String)]| -> String {
            pairs
                .iter()
                .map(|(k, v)| format!("<tr><th>{k}</th><td>{v}</td></tr>\n"))
                .collect()
        };
        let stats: String = self
            .stats
            .iter()
            .map(|(k, v)| format!(r#"<tr><th>{k}</th><td class="cell-num">{v}</td><td class="cell-barchart"></td><td>0</td><td>0</td></tr>"#))
            .collect();

        format!(
            r#"<div class="sv-tabs-panel">
  <div class="grid-row">
    <div class="grid-col"><img alt="artwork"></div>
    <div class="grid-col">
      <h2>Pokédex data</h2>
      <table class="vitals-table"><tbody>
        <tr><th>National №</th><td><strong>{index}</strong></td></tr>
        <tr><th>Type</th><td>{types}</td></tr>
        <tr><th>Species</th><td>{species}</td></tr>
        <tr><th>Height</th><td>{height}</td></tr>
        <tr><th>Weight</th><td>{weight}</td></tr>
        <tr><th>Abilities</th><td>{abilities}</td></tr>
        <tr><th>Local №</th><td>{local}</td></tr>
      </tbody></table>
    </div>
    <div class="grid-col">
      <div class="grid-row">
        <div class="grid-col"><h2>Training</h2><table class="vitals-table"><tbody>{training}</tbody></table></div>
        <div class="grid-col"><h2>Breeding</h2><table class="vitals-table"><tbody>{breeding}</tbody></table></div>
      </div>
    </div>
  </div>
  <div class="grid-row">
    <div class="grid-col">
      <div id="dex-stats"></div>
      <div class="resp-scroll"><h2>Base stats</h2><table class="vitals-table"><tbody>{stats}</tbody></table></div>
    </div>
  </div>
</div>"#,
            index = self.index,
            species = self.species,
            height = self.height,
            weight = self.weight,
            training = rows(&self.training),
            breeding = rows(&self.breeding),
        )
    }
}

/// A full detail page with one tab per name and one panel per block
pub fn detail_page(name: &str, tabs: &[&str], blocks: &[Block], next: Option<&str>) -> String {
    let tabs: String = tabs
        .iter()
        .map(|t| format!(r#"<a class="sv-tabs-tab">{t}</a>"#))
        .collect();
    let panels: String = blocks.iter().map(Block::render).collect();
    let next = next
        .map(|href| format!(r#"<a class="entity-nav-next" href="{href}">next</a>"#))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html><head><title>{name}</title></head>
<body>
<main>
  <h1>{name}</h1>
  <nav class="entity-nav">{next}</nav>
  <div class="grid-row"><p>{name} is a Pokémon.</p></div>
  <div class="tabset-basics">
    <div class="sv-tabs-tab-list">{tabs}</div>
    <div class="sv-tabs-panel-list">{panels}</div>
  </div>
</main>
</body></html>"#
    )
}
