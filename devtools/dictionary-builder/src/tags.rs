//! Dictionary builder for data element entries.
//!
//! Includes the attributes of [PS3.6 table 6-1][1],
//! the command fields of table 7-1
//! and the directory structuring elements of table 8-1,
//! each with its value representation and value multiplicity.
//!
//! [1]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/chapter_6.html#table_6-1

use std::{
    collections::BTreeMap,
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};

use clap::{Parser, ValueEnum};
use eyre::{Context, ContextCompat, Result};
use heck::ToShoutySnakeCase;
use regex::Regex;
use serde::Serialize;
use sxd_document::parser;
use sxd_xpath::{Factory, Value};

use crate::common::RetiredOptions;

/// URL to DICOM standard Part 6 in XML
const DEFAULT_LOCATION: &str =
    "https://dicom.nema.org/medical/dicom/current/source/docbook/part06/part06.xml";

/// Chapter and table labels holding data element descriptions
const TABLES: &[(&str, &str)] = &[("6", "6-1"), ("7", "7-1"), ("8", "8-1")];

/// Fetch and build a dictionary of DICOM data elements
#[derive(Debug, Parser)]
#[clap(name = "data-element", alias = "tags")]
pub struct DataElementApp {
    /// Path or URL to the XML file containing the attribute tables
    #[clap(default_value(DEFAULT_LOCATION))]
    from: String,

    /// The output file (`tags.rs` or `tags.json` by default)
    #[clap(short('o'))]
    output: Option<String>,

    /// The output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Rs)]
    format: OutputFormat,

    /// Ignore retired attributes
    #[clap(long)]
    ignore_retired: bool,

    /// Mark retired attributes as deprecated
    #[clap(long)]
    deprecate_retired: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Rust code with tag constants and the entry table
    Rs,
    /// JSON object indexed by tag
    Json,
}

pub fn run(app: DataElementApp) -> Result<()> {
    let DataElementApp {
        from,
        output,
        format,
        ignore_retired,
        deprecate_retired,
    } = app;

    let src = from;
    let dst = output.unwrap_or_else(|| match format {
        OutputFormat::Rs => "tags.rs".to_string(),
        OutputFormat::Json => "tags.json".to_string(),
    });

    let retired_options = RetiredOptions::from_flags(ignore_retired, deprecate_retired);

    let xml_data = if src.starts_with("http:") || src.starts_with("https:") {
        // read from URL
        println!("Downloading DICOM dictionary ...");
        let resp = ureq::get(&src).call()?;
        resp.into_string()?
    } else {
        // read from File
        println!("Reading from file {}", src);
        std::fs::read_to_string(src)?
    };

    let entries = retrieve_data_elements(&xml_data)?;

    match format {
        OutputFormat::Rs => to_code_file(dst, &entries, retired_options),
        OutputFormat::Json => to_json_file(dst, &entries, retired_options),
    }
}

/// A DICOM data element descriptor, as written in the standard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Entry {
    tag: String,
    name: String,
    alias: String,
    vr: String,
    vm: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    retired: bool,
}

/// How an entry's tag is matched against data element tags.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TagPattern {
    /// (gggg,eeee)
    Single(String, String),
    /// (ggxx,eeee), with the `xx` portion zeroed
    Group100(String, String),
    /// (gggg,eexx), with the `xx` portion zeroed
    Element100(String, String),
}

impl TagPattern {
    fn range_variant(&self) -> &'static str {
        match self {
            TagPattern::Single(..) => "Single",
            TagPattern::Group100(..) => "Group100",
            TagPattern::Element100(..) => "Element100",
        }
    }

    fn parts(&self) -> (&str, &str) {
        match self {
            TagPattern::Single(g, e) | TagPattern::Group100(g, e) | TagPattern::Element100(g, e) => {
                (g, e)
            }
        }
    }

    fn sort_key(&self) -> (u16, u16) {
        let (g, e) = self.parts();
        (
            u16::from_str_radix(g, 16).unwrap_or(u16::MAX),
            u16::from_str_radix(e, 16).unwrap_or(u16::MAX),
        )
    }
}

struct TagPatterns {
    single: Regex,
    group100: Regex,
    element100: Regex,
}

impl TagPatterns {
    fn new() -> Result<Self> {
        Ok(TagPatterns {
            single: Regex::new(r"^\(([0-9A-F]{4}),([0-9A-F]{4})\)$")?,
            group100: Regex::new(r"^\(([0-9A-F]{2})xx,([0-9A-F]{4})\)$")?,
            element100: Regex::new(r"^\(([0-9A-F]{4}),([0-9A-F]{2})xx\)$")?,
        })
    }

    fn parse(&self, tag: &str) -> Option<TagPattern> {
        if let Some(cap) = self.single.captures(tag) {
            return Some(TagPattern::Single(cap[1].to_string(), cap[2].to_string()));
        }
        if let Some(cap) = self.group100.captures(tag) {
            return Some(TagPattern::Group100(
                format!("{}00", &cap[1]),
                cap[2].to_string(),
            ));
        }
        if let Some(cap) = self.element100.captures(tag) {
            return Some(TagPattern::Element100(
                cap[1].to_string(),
                format!("{}00", &cap[2]),
            ));
        }
        None
    }
}

/// Translate the VR column into an expression of `VirtualVr`,
/// plus the original text when it named more than one VR.
fn vr_expression(tag: &TagPattern, vr: &str) -> Option<(String, Option<&'static str>)> {
    match vr {
        "US or SS" => Some(("Xs".to_string(), Some("US or SS"))),
        "OB or OW" if *tag == TagPattern::Single("7FE0".into(), "0010".into()) => {
            Some(("Px".to_string(), Some("OB or OW")))
        }
        "OB or OW" => Some(("Ox".to_string(), Some("OB or OW"))),
        "US or OW" | "US or SS or OW" => Some(("Lt".to_string(), Some("US or OW"))),
        "" | "See Note" => Some(("Exact(UN)".to_string(), Some("See Note"))),
        vr if vr.len() == 2 && vr.bytes().all(|b| b.is_ascii_uppercase()) => {
            Some((format!("Exact({})", vr), None))
        }
        _ => None,
    }
}

/// Name of the Rust constant for an attribute keyword.
fn constant_name(keyword: &str) -> String {
    keyword.to_shouty_snake_case().replace("I_DS", "IDS")
}

fn clean(text: String) -> String {
    text.trim().replace('\u{200b}', "")
}

/// Collects data element entries from PS3.6 tables 6-1, 7-1 and 8-1
fn retrieve_data_elements(xml_data: &str) -> Result<Vec<Entry>> {
    let xml = parser::parse(xml_data)?;
    let doc = xml.as_document();

    let context = {
        let mut ctx = sxd_xpath::Context::new();
        ctx.set_namespace("xmlns", "http://docbook.org/ns/docbook");
        ctx
    };

    let factory = Factory::new();
    let cell_xpaths = (1..=6)
        .map(|column| {
            factory
                .build(&format!("string(xmlns:td[{}])", column))
                .with_context(|| format!("Could not compile XPath to column {}", column))?
                .context("No XPath was compiled")
        })
        .collect::<Result<Vec<_>>>()?;

    let mut entries = vec![];

    for (chapter, table) in TABLES {
        let table_rows_xpath = factory
            .build(&format!(
                "//xmlns:chapter[@label='{}']/xmlns:table[@label='{}']/xmlns:tbody/xmlns:tr",
                chapter, table
            ))
            .with_context(|| format!("Could not compile XPath to table {}", table))?
            .context("No XPath was compiled")?;

        let nodeset = match table_rows_xpath.evaluate(&context, doc.root())? {
            Value::Nodeset(nodeset) => nodeset,
            _ => eyre::bail!("Expected node set"),
        };

        if nodeset.size() == 0 {
            eprintln!("No rows found in table {}", table);
            continue;
        }

        for node in nodeset.document_order() {
            let elem = if let Some(elem) = node.element() {
                elem
            } else {
                continue;
            };

            let mut cells = Vec::with_capacity(cell_xpaths.len());
            for xpath in &cell_xpaths {
                cells.push(clean(xpath.evaluate(&context, elem)?.into_string()));
            }
            let mut cells = cells.into_iter();
            let mut next = || cells.next().unwrap_or_default();
            let (tag, name, alias, vr, vm, remark) = (next(), next(), next(), next(), next(), next());

            // unnamed rows are reserved or have no keyword
            if alias.is_empty() {
                continue;
            }

            entries.push(Entry {
                tag,
                name,
                alias,
                vr,
                vm,
                retired: remark.starts_with("RET"),
            });
        }
    }

    println!("Retrieved {} data elements", entries.len());

    Ok(entries)
}

/// An entry ready to be written as Rust code.
struct CodeEntry<'a> {
    entry: &'a Entry,
    tag: TagPattern,
    constant: String,
    vr: String,
    vr_comment: Option<&'static str>,
}

fn prepare_code_entries(
    entries: &[Entry],
    retired_options: RetiredOptions,
) -> Result<Vec<CodeEntry<'_>>> {
    let patterns = TagPatterns::new()?;
    let mut constants = BTreeMap::new();
    let mut out = Vec::with_capacity(entries.len());

    for entry in entries {
        if entry.retired && retired_options == RetiredOptions::Ignore {
            continue;
        }
        let tag = if let Some(tag) = patterns.parse(&entry.tag) {
            tag
        } else {
            eprintln!("Unsupported tag pattern `{}` of {}", entry.tag, entry.alias);
            continue;
        };
        let (vr, vr_comment) = if let Some(vr) = vr_expression(&tag, &entry.vr) {
            vr
        } else {
            eprintln!("Unsupported VR `{}` of {}", entry.vr, entry.alias);
            continue;
        };
        let constant = constant_name(&entry.alias);
        if let Some(previous) = constants.insert(constant.clone(), &entry.tag) {
            eprintln!(
                "Constant {} of {} already defined for {}",
                constant, entry.tag, previous
            );
            continue;
        }
        out.push(CodeEntry {
            entry,
            tag,
            constant,
            vr,
            vr_comment,
        });
    }

    out.sort_by_key(|e| e.tag.sort_key());
    Ok(out)
}

/// Write the tag dictionary as Rust code.
fn to_code_file<P>(dest_path: P, entries: &[Entry], retired_options: RetiredOptions) -> Result<()>
where
    P: AsRef<Path>,
{
    if let Some(p_dir) = dest_path.as_ref().parent() {
        create_dir_all(p_dir)?;
    }
    let f = BufWriter::new(File::create(&dest_path)?);
    write_code(f, entries, retired_options)
}

fn write_code<W: Write>(
    mut f: W,
    entries: &[Entry],
    retired_options: RetiredOptions,
) -> Result<()> {
    let entries = prepare_code_entries(entries, retired_options)?;

    f.write_all(b"//! Data element tag declarations\n//!\n")?;
    f.write_all(b"//! Attributes of the DICOM standard registry, PS3.6,\n")?;
    f.write_all(b"//! with their typical value representation and value multiplicity.\n")?;
    f.write_all(b"//! Generated with `dicom-value-dictionary-builder data-element`.\n")?;
    f.write_all(
        b"//! Repeating group attributes `(ggxx,eeee)` have the `xx` portion zeroed.\n",
    )?;
    if retired_options.deprecates() {
        f.write_all(b"#![allow(deprecated)]\n")?;
    }
    f.write_all(
        b"\nuse dicom_value_core::dictionary::{DataDictionaryEntryRef, TagRange::*, VirtualVr::*};\n\
          use dicom_value_core::Tag;\n\
          use dicom_value_core::VR::*;\n\n",
    )?;

    for e in &entries {
        let (group, elem) = e.tag.parts();
        writeln!(
            f,
            "/// {} {} {} {}",
            e.entry.alias, e.entry.tag, e.entry.vr, e.entry.vm
        )?;
        if e.entry.retired && retired_options.deprecates() {
            writeln!(f, "#[deprecated(note = \"Retired DICOM tag\")]")?;
        }
        writeln!(
            f,
            "#[rustfmt::skip]\npub const {}: Tag = Tag(0x{}, 0x{});",
            e.constant, group, elem
        )?;
    }

    f.write_all(b"\ntype E = DataDictionaryEntryRef<'static>;\n\n")?;
    f.write_all(b"#[rustfmt::skip]\npub(crate) const ENTRIES: &[E] = &[\n")?;
    for e in &entries {
        write!(
            f,
            "    E {{ tag: {}({}), alias: \"{}\", vr: {}, vm: \"{}\" }},",
            e.tag.range_variant(),
            e.constant,
            e.entry.alias,
            e.vr,
            e.entry.vm
        )?;
        match e.vr_comment {
            Some(comment) => writeln!(f, " // {}", comment)?,
            None => writeln!(f)?,
        }
    }
    f.write_all(b"];\n")?;
    f.flush()?;

    Ok(())
}

/// Write the tag dictionary as a JSON object indexed by tag.
fn to_json_file<P>(dest_path: P, entries: &[Entry], retired_options: RetiredOptions) -> Result<()>
where
    P: AsRef<Path>,
{
    if let Some(p_dir) = dest_path.as_ref().parent() {
        create_dir_all(p_dir)?;
    }
    let f = BufWriter::new(File::create(&dest_path)?);

    let entries: BTreeMap<&str, &Entry> = entries
        .iter()
        .filter(|e| !(e.retired && retired_options == RetiredOptions::Ignore))
        .map(|e| (e.tag.as_str(), e))
        .collect();

    serde_json::to_writer_pretty(f, &entries).context("Could not write JSON")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PART06: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<book xmlns="http://docbook.org/ns/docbook">
<chapter label="6">
<table label="6-1">
<thead><tr><th><para>Tag</para></th><th><para>Name</para></th><th><para>Keyword</para></th><th><para>VR</para></th><th><para>VM</para></th><th><para/></th></tr></thead>
<tbody>
<tr><td><para>(7FE0,0010)</para></td><td><para>Pixel Data</para></td><td><para>PixelData</para></td><td><para>OB or OW</para></td><td><para>1</para></td><td><para/></td></tr>
<tr><td><para>(0018,1310)</para></td><td><para>Acquisition Matrix</para></td><td><para>Acquisition&#8203;Matrix</para></td><td><para>US</para></td><td><para>4</para></td><td><para/></td></tr>
<tr><td><para><emphasis role="italic">(0008,0010)</emphasis></para></td><td><para><emphasis role="italic">Recognition Code</emphasis></para></td><td><para><emphasis role="italic">RecognitionCode</emphasis></para></td><td><para><emphasis role="italic">SH</emphasis></para></td><td><para><emphasis role="italic">1</emphasis></para></td><td><para><emphasis role="italic">RET</emphasis></para></td></tr>
<tr><td><para>(60xx,3000)</para></td><td><para>Overlay Data</para></td><td><para>OverlayData</para></td><td><para>OB or OW</para></td><td><para>1</para></td><td><para/></td></tr>
<tr><td><para>(0018,9445)</para></td><td><para/></td><td><para/></td><td><para/></td><td><para/></td><td><para>RET</para></td></tr>
</tbody>
</table>
</chapter>
<chapter label="7">
<table label="7-1">
<tbody>
<tr><td><para>(0000,0900)</para></td><td><para>Status</para></td><td><para>Status</para></td><td><para>US</para></td><td><para>1</para></td><td><para>The status of the operation.</para></td></tr>
</tbody>
</table>
</chapter>
</book>
"#;

    fn render(retired_options: RetiredOptions) -> String {
        let entries = retrieve_data_elements(PART06).unwrap();
        let mut out = Vec::new();
        write_code(&mut out, &entries, retired_options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reads_rows_of_every_table() {
        let entries = retrieve_data_elements(PART06).unwrap();
        let aliases: Vec<_> = entries.iter().map(|e| e.alias.as_str()).collect();
        assert_eq!(
            aliases,
            [
                "PixelData",
                "AcquisitionMatrix",
                "RecognitionCode",
                "OverlayData",
                "Status"
            ]
        );

        let matrix = &entries[1];
        assert_eq!(matrix.tag, "(0018,1310)");
        assert_eq!(matrix.vr, "US");
        assert_eq!(matrix.vm, "4");
        assert!(!matrix.retired);
        assert!(entries[2].retired);
        assert!(!entries[4].retired);
    }

    #[test]
    fn parses_tag_patterns() {
        let patterns = TagPatterns::new().unwrap();
        assert_eq!(
            patterns.parse("(0018,1310)"),
            Some(TagPattern::Single("0018".into(), "1310".into()))
        );
        assert_eq!(
            patterns.parse("(60xx,3000)"),
            Some(TagPattern::Group100("6000".into(), "3000".into()))
        );
        assert_eq!(
            patterns.parse("(0020,31xx)"),
            Some(TagPattern::Element100("0020".into(), "3100".into()))
        );
        assert_eq!(patterns.parse("(0020,xxxx)"), None);
    }

    #[test]
    fn names_constants_after_keywords() {
        assert_eq!(constant_name("AcquisitionMatrix"), "ACQUISITION_MATRIX");
        assert_eq!(constant_name("OtherPatientIDs"), "OTHER_PATIENT_IDS");
    }

    #[test]
    fn writes_constants_and_entries_sorted_by_tag() {
        let code = render(RetiredOptions::Include { deprecate: false });

        assert!(code.contains(
            "/// AcquisitionMatrix (0018,1310) US 4\n\
             #[rustfmt::skip]\n\
             pub const ACQUISITION_MATRIX: Tag = Tag(0x0018, 0x1310);\n"
        ));
        assert!(code.contains(
            "    E { tag: Single(ACQUISITION_MATRIX), alias: \"AcquisitionMatrix\", vr: Exact(US), vm: \"4\" },\n"
        ));
        assert!(code.contains(
            "    E { tag: Group100(OVERLAY_DATA), alias: \"OverlayData\", vr: Ox, vm: \"1\" }, // OB or OW\n"
        ));
        assert!(code.contains(
            "    E { tag: Single(PIXEL_DATA), alias: \"PixelData\", vr: Px, vm: \"1\" }, // OB or OW\n"
        ));
        assert!(code.contains("RecognitionCode"));
        assert!(!code.contains("#[deprecated"));

        let status = code.find("alias: \"Status\"").unwrap();
        let matrix = code.find("alias: \"AcquisitionMatrix\"").unwrap();
        let pixel_data = code.find("alias: \"PixelData\"").unwrap();
        assert!(status < matrix && matrix < pixel_data);
    }

    #[test]
    fn honors_retired_options() {
        let code = render(RetiredOptions::Ignore);
        assert!(!code.contains("RecognitionCode"));

        let code = render(RetiredOptions::Include { deprecate: true });
        assert!(code.contains("#![allow(deprecated)]\n"));
        assert!(code.contains(
            "#[deprecated(note = \"Retired DICOM tag\")]\n\
             #[rustfmt::skip]\n\
             pub const RECOGNITION_CODE: Tag = Tag(0x0008, 0x0010);\n"
        ));
    }

    #[test]
    fn maps_multiple_vrs_to_virtual_ones() {
        let single = TagPattern::Single("0028".into(), "0106".into());
        assert_eq!(
            vr_expression(&single, "US or SS"),
            Some(("Xs".to_string(), Some("US or SS")))
        );
        assert_eq!(
            vr_expression(&single, "US or SS or OW"),
            Some(("Lt".to_string(), Some("US or OW")))
        );
        assert_eq!(
            vr_expression(&single, "See Note"),
            Some(("Exact(UN)".to_string(), Some("See Note")))
        );
        assert_eq!(vr_expression(&single, "DS"), Some(("Exact(DS)".to_string(), None)));
        assert_eq!(vr_expression(&single, "OB or XX"), None);
    }
}
