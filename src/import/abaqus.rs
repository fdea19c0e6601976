//! Abaqus `.inp` deck importer
//!
//! A line-driven state machine lexes the deck into buffered node, element
//! and node-set records, then materializes them in three passes: node table
//! (optionally pruned of unused IDs), element table, named node sets.
//! Unrecognized sections and non-tetrahedral element types are skipped, not
//! errors; decks commonly mix sections this importer does not model.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};

use crate::error::ImportResult;
use crate::material::ContinuumMaterial;
use crate::mesh::{Mesh, NodeSet};
use crate::transform::MeshTransform;

use super::element_table::{build_element, parse_element_record, ElementRecord};
use super::node_table::{parse_node_record, NodeRecord, NodeTable};
use super::{parse_u32, read_file, tokens, LineContext};

/// 4-node tetrahedral element types accepted from `*ELEMENT` blocks.
const SUPPORTED_TET_TYPES: &[&str] = &["C3D4", "C3D4H", "DC3D4"];

/// Importer for tetrahedral meshes saved in Abaqus input decks.
///
/// Recognized sections: `*NODE`, `*ELEMENT` (with `TYPE=` selecting a
/// 4-node tetrahedral type) and `*NSET` (with `NSET=<name>`). Everything
/// else is skipped.
pub struct AbaqusImporter;

impl AbaqusImporter {
    /// Import a `.inp` deck into `mesh`.
    ///
    /// Named node sets are appended to `node_sets` only on full success.
    /// With `discard_unused_nodes` set, nodes referenced by no accepted
    /// element and no node set are not imported at all.
    ///
    /// On failure the mesh keeps whatever was appended before the error and
    /// `node_sets` is left untouched.
    pub fn import(
        mesh: &mut Mesh,
        path: impl AsRef<Path>,
        material: Arc<ContinuumMaterial>,
        node_sets: &mut Vec<NodeSet>,
        transform: &MeshTransform,
        discard_unused_nodes: bool,
    ) -> ImportResult<()> {
        let path = path.as_ref();
        let text = read_file(path)?;
        let file = path.display().to_string();

        let deck = parse_deck(&text, &file)?;
        materialize(
            mesh,
            &deck,
            &material,
            node_sets,
            transform,
            discard_unused_nodes,
            &file,
        )
    }
}

/// One `*NSET` name with its member IDs in deck declaration order.
/// Blocks repeating a name append to the same record.
#[derive(Debug)]
struct SetRecord {
    name: String,
    ids: Vec<u32>,
}

/// Buffered output of the lexer pass.
#[derive(Debug, Default)]
struct Deck {
    nodes: Vec<NodeRecord>,
    elements: Vec<ElementRecord>,
    sets: Vec<SetRecord>,
}

/// Lexer state over deck sections.
#[derive(Clone, Copy)]
enum Section {
    Scanning,
    Nodes,
    Elements { supported: bool },
    Nset { set: usize },
}

/// Keyword line: `*NAME, KEY=VALUE, FLAG, ...` (case-insensitive name/keys).
struct Keyword {
    name: String,
    params: Vec<(String, Option<String>)>,
}

impl Keyword {
    fn parse(line: &str, ctx: &LineContext) -> ImportResult<Self> {
        let body = line.trim_start_matches('*');
        let mut fields = body.split(',').map(str::trim);

        let name = fields
            .next()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ctx.format("empty keyword line"))?
            .to_uppercase();

        let mut params = Vec::new();
        for field in fields {
            if field.is_empty() {
                continue;
            }
            match field.split_once('=') {
                Some((key, value)) => {
                    params.push((key.trim().to_uppercase(), Some(value.trim().to_string())));
                }
                None => params.push((field.to_uppercase(), None)),
            }
        }
        Ok(Self { name, params })
    }

    fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }
}

fn parse_deck(text: &str, file: &str) -> ImportResult<Deck> {
    let mut deck = Deck::default();
    let mut section = Section::Scanning;

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let ctx = LineContext { file, line: i + 1 };

        if line.is_empty() || line.starts_with("**") {
            // Deck comment; skipped in every state.
            continue;
        }

        if line.starts_with('*') {
            section = enter_section(&mut deck, line, &ctx)?;
            continue;
        }

        match section {
            Section::Scanning => {}
            Section::Nodes => deck.nodes.push(parse_node_record(line, &ctx)?),
            Section::Elements { supported } => {
                if supported {
                    deck.elements.push(parse_element_record(line, &ctx)?);
                }
            }
            Section::Nset { set } => expand_set_line(line, &ctx, &mut deck.sets[set].ids)?,
        }
    }
    Ok(deck)
}

fn enter_section(deck: &mut Deck, line: &str, ctx: &LineContext) -> ImportResult<Section> {
    let keyword = Keyword::parse(line, ctx)?;
    match keyword.name.as_str() {
        "NODE" => Ok(Section::Nodes),
        "ELEMENT" => {
            let element_type = keyword
                .param("TYPE")
                .ok_or_else(|| ctx.format("*ELEMENT requires a TYPE attribute"))?
                .to_uppercase();
            let supported = SUPPORTED_TET_TYPES.contains(&element_type.as_str());
            if !supported {
                warn!(
                    "{}:{}: skipping *ELEMENT block with unsupported type {element_type}",
                    ctx.file, ctx.line
                );
            }
            Ok(Section::Elements { supported })
        }
        "NSET" => {
            let name = keyword
                .param("NSET")
                .ok_or_else(|| ctx.format("*NSET requires an NSET=<name> attribute"))?;
            Ok(Section::Nset {
                set: find_or_create_set(deck, name),
            })
        }
        other => {
            debug!("{}:{}: skipping unrecognized section *{other}", ctx.file, ctx.line);
            Ok(Section::Scanning)
        }
    }
}

fn find_or_create_set(deck: &mut Deck, name: &str) -> usize {
    match deck.sets.iter().position(|s| s.name == name) {
        Some(idx) => idx,
        None => {
            deck.sets.push(SetRecord {
                name: name.to_string(),
                ids: Vec::new(),
            });
            deck.sets.len() - 1
        }
    }
}

/// Collect the IDs of one `*NSET` data line. A line with exactly three
/// values is an inclusive range `first, last, stride`; anything else is a
/// plain ID list.
fn expand_set_line(line: &str, ctx: &LineContext, out: &mut Vec<u32>) -> ImportResult<()> {
    let toks = tokens(line);
    if toks.len() == 3 {
        let first = parse_u32(toks[0], ctx)?;
        let last = parse_u32(toks[1], ctx)?;
        let stride = parse_u32(toks[2], ctx)?;
        if stride == 0 {
            return Err(ctx.malformed("node id range with zero stride"));
        }
        if first > last {
            return Err(ctx.malformed(format!(
                "node id range bounds out of order: {first} > {last}"
            )));
        }
        out.extend((first..=last).step_by(stride as usize));
    } else {
        for tok in toks {
            out.push(parse_u32(tok, ctx)?);
        }
    }
    Ok(())
}

fn materialize(
    mesh: &mut Mesh,
    deck: &Deck,
    material: &Arc<ContinuumMaterial>,
    node_sets: &mut Vec<NodeSet>,
    transform: &MeshTransform,
    discard_unused_nodes: bool,
    file: &str,
) -> ImportResult<()> {
    let kind = material.kind();

    // Pass 1: node table, pruned of IDs no element or set references.
    let used = discard_unused_nodes.then(|| used_ids(deck));
    let mut table = NodeTable::default();
    let mut pruned = 0usize;
    for record in &deck.nodes {
        if let Some(used) = &used {
            if !used.contains(&record.id) {
                pruned += 1;
                continue;
            }
        }
        table.insert(mesh, record, kind, transform, file)?;
    }
    if pruned > 0 {
        debug!("{file}: discarded {pruned} nodes unused by elements and sets");
    }

    // Pass 2: elements against the (possibly pruned) table. A reference to
    // an ID that never reached the table is fatal here.
    for record in &deck.elements {
        build_element(mesh, &table, record, material, file)?;
    }

    // Pass 3: node sets, in declaration order. Appended to the caller's
    // collection only once the fallible passes are done.
    let mut built = Vec::with_capacity(deck.sets.len());
    for set in &deck.sets {
        let mut node_set = NodeSet::new(&set.name);
        for &id in &set.ids {
            match table.resolve(id) {
                Some(idx) => node_set.nodes.push(idx),
                None => warn!(
                    "{file}: node set '{}' names node {id}, which is absent from the imported mesh; skipping",
                    set.name
                ),
            }
        }
        built.push(node_set);
    }
    node_sets.extend(built);
    Ok(())
}

/// IDs referenced by any accepted element or any node set.
fn used_ids(deck: &Deck) -> HashSet<u32> {
    let mut used = HashSet::new();
    for element in &deck.elements {
        used.extend(element.nodes);
    }
    for set in &deck.sets {
        used.extend(set.ids.iter().copied());
    }
    used
}
