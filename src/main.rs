use ahash::AHashSet;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shobai::text::Document;
use shobai::{
    compute_dcg, compute_idcg, compute_ndcg, cosine_similarity, count_lines, hit_percent,
    jaccard_overlap, js_divergence, quantize_similarity, read_idfs, read_stopwords, top_k,
    ResourceLocator,
};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Statistics helpers for text and IR experiments
#[derive(Parser, Debug)]
#[command(name = "shobai")]
#[command(about = "Set overlap, divergence, cosine, DCG and top-k over text files", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Directory searched for resources before SHOBAI_RESOURCE_PATH (repeatable)
    #[arg(long = "resource-dir", global = true)]
    resource_dirs: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count the lines of a file
    Lines { file: PathBuf },

    /// Jaccard overlap and hit percentages between the term sets of two files
    Overlap {
        a: PathBuf,
        b: PathBuf,
        /// Stopword list, one word per line
        #[arg(long)]
        stopwords: Option<PathBuf>,
    },

    /// Cosine similarity and JS divergence between the terms of two files
    Compare {
        a: PathBuf,
        b: PathBuf,
        /// Stopword list, one word per line
        #[arg(long)]
        stopwords: Option<PathBuf>,
        /// Tab-separated term/document-frequency table used to weight terms
        #[arg(long, requires = "docs")]
        idf: Option<PathBuf>,
        /// Number of documents in the collection the IDF table comes from
        #[arg(long)]
        docs: Option<u64>,
    },

    /// Highest-IDF terms of a term/document-frequency table
    Top {
        idf: PathBuf,
        /// Number of documents in the collection
        #[arg(long)]
        docs: u64,
        /// How many terms to keep
        #[arg(short, long, default_value_t = 10)]
        k: usize,
    },

    /// DCG, IDCG and NDCG at every rank of a relevance list
    Ndcg {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        relevance: Vec<f64>,
    },

    /// Quantize a similarity in [0, 1] into a discrete level
    Quantize {
        #[arg(allow_negative_numbers = true)]
        similarity: f64,
        /// Number of levels
        #[arg(long, default_value_t = 5)]
        levels: usize,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("shobai v{}", env!("CARGO_PKG_VERSION"));

    let env_locator = ResourceLocator::from_env();
    let locator = ResourceLocator::new(
        args.resource_dirs
            .iter()
            .cloned()
            .chain(env_locator.roots().iter().cloned()),
    );
    debug!("Resource roots: {:?}", locator.roots());

    match args.command {
        Command::Lines { file } => {
            let lines = count_lines(locator.open(&file)?)
                .with_context(|| format!("failed to read {}", file.display()))?;
            emit(
                &LinesReport {
                    file: file.display().to_string(),
                    lines,
                },
                args.json,
            )
        }

        Command::Overlap { a, b, stopwords } => {
            let stopwords = load_stopwords(&locator, stopwords.as_deref())?;
            let doc_a = load_document(&locator, &a, &stopwords)?;
            let doc_b = load_document(&locator, &b, &stopwords)?;
            let (terms_a, terms_b) = (doc_a.terms(), doc_b.terms());

            emit(
                &OverlapReport {
                    terms_a: terms_a.len(),
                    terms_b: terms_b.len(),
                    jaccard: jaccard_overlap(&*terms_a, &*terms_b),
                    hit_a_in_b: hit_percent(&*terms_a, &*terms_b),
                    hit_b_in_a: hit_percent(&*terms_b, &*terms_a),
                },
                args.json,
            )
        }

        Command::Compare {
            a,
            b,
            stopwords,
            idf,
            docs,
        } => {
            let stopwords = load_stopwords(&locator, stopwords.as_deref())?;
            let doc_a = load_document(&locator, &a, &stopwords)?;
            let doc_b = load_document(&locator, &b, &stopwords)?;

            let (vec_a, vec_b, weighting) = match (idf, docs) {
                (Some(idf), Some(docs)) => {
                    let idfs = read_idfs(locator.open(&idf)?, docs)
                        .with_context(|| format!("failed to load IDF table {}", idf.display()))?;
                    info!(terms = idfs.len(), "Loaded IDF table");
                    (doc_a.tf_idf_vector(&idfs), doc_b.tf_idf_vector(&idfs), "tf-idf")
                }
                _ => (doc_a.tf_vector(), doc_b.tf_vector(), "tf"),
            };

            // Iterate over the smaller vector
            let cosine = if vec_a.len() <= vec_b.len() {
                cosine_similarity(&*vec_a, &*vec_b)
            } else {
                cosine_similarity(&*vec_b, &*vec_a)
            };

            emit(
                &CompareReport {
                    weighting,
                    cosine,
                    js_divergence: js_divergence(&*doc_a.distribution(), &*doc_b.distribution()),
                },
                args.json,
            )
        }

        Command::Top { idf, docs, k } => {
            let idfs = read_idfs(locator.open(&idf)?, docs)
                .with_context(|| format!("failed to load IDF table {}", idf.display()))?;
            info!(terms = idfs.len(), "Loaded IDF table");

            let mut terms: Vec<TermScore> = top_k(&*idfs, k)
                .into_iter()
                .map(|(term, idf)| TermScore { term, idf })
                .collect();
            terms.sort_by(|x, y| y.idf.total_cmp(&x.idf).then_with(|| x.term.cmp(&y.term)));

            emit(&TopReport { terms }, args.json)
        }

        Command::Ndcg { relevance } => {
            let dcg = compute_dcg(&relevance)?;
            let idcg = compute_idcg(&relevance)?;
            let ndcg = compute_ndcg(&relevance)?;

            let ranks = relevance
                .iter()
                .enumerate()
                .map(|(i, &rel)| RankRow {
                    rank: i + 1,
                    relevance: rel,
                    dcg: dcg[i],
                    idcg: idcg[i],
                    ndcg: ndcg[i],
                })
                .collect();

            emit(&NdcgReport { ranks }, args.json)
        }

        Command::Quantize { similarity, levels } => {
            let level = quantize_similarity(similarity, levels)?;
            emit(
                &QuantizeReport {
                    similarity,
                    levels,
                    level,
                },
                args.json,
            )
        }
    }
}

fn load_stopwords(locator: &ResourceLocator, path: Option<&Path>) -> Result<AHashSet<String>> {
    let Some(path) = path else {
        return Ok(AHashSet::new());
    };

    let words = read_stopwords(locator.open(path)?)
        .with_context(|| format!("failed to load stopwords {}", path.display()))?;
    info!(words = words.len(), "Loaded stopwords from {}", path.display());
    Ok(words)
}

fn load_document(locator: &ResourceLocator, path: &Path, stopwords: &AHashSet<String>) -> Result<Document> {
    let doc = Document::load(locator, path, stopwords)
        .with_context(|| format!("failed to read {}", path.display()))?;
    info!(
        lines = doc.lines(),
        terms = doc.counts().len(),
        "Read {}",
        path.display()
    );
    Ok(doc)
}

fn emit<T: Serialize + fmt::Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

#[derive(Serialize)]
struct LinesReport {
    file: String,
    lines: usize,
}

impl fmt::Display for LinesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\t{}", self.lines, self.file)
    }
}

#[derive(Serialize)]
struct OverlapReport {
    terms_a: usize,
    terms_b: usize,
    jaccard: f64,
    hit_a_in_b: f64,
    hit_b_in_a: f64,
}

impl fmt::Display for OverlapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "terms:       {} / {}", self.terms_a, self.terms_b)?;
        writeln!(f, "jaccard:     {:.6}", self.jaccard)?;
        writeln!(f, "hit a in b:  {:.6}", self.hit_a_in_b)?;
        writeln!(f, "hit b in a:  {:.6}", self.hit_b_in_a)
    }
}

#[derive(Serialize)]
struct CompareReport {
    weighting: &'static str,
    cosine: f64,
    js_divergence: f64,
}

impl fmt::Display for CompareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cosine ({}):  {:.6}", self.weighting, self.cosine)?;
        writeln!(f, "js divergence: {:.6}", self.js_divergence)
    }
}

#[derive(Serialize)]
struct TermScore {
    term: String,
    idf: f64,
}

#[derive(Serialize)]
struct TopReport {
    terms: Vec<TermScore>,
}

impl fmt::Display for TopReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.terms {
            writeln!(f, "{}\t{:.6}", t.term, t.idf)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct RankRow {
    rank: usize,
    relevance: f64,
    dcg: f64,
    idcg: f64,
    ndcg: f64,
}

#[derive(Serialize)]
struct NdcgReport {
    ranks: Vec<RankRow>,
}

impl fmt::Display for NdcgReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rank\trel\tdcg\tidcg\tndcg")?;
        for r in &self.ranks {
            writeln!(
                f,
                "{}\t{}\t{:.4}\t{:.4}\t{:.4}",
                r.rank, r.relevance, r.dcg, r.idcg, r.ndcg
            )?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct QuantizeReport {
    similarity: f64,
    levels: usize,
    level: usize,
}

impl fmt::Display for QuantizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} -> level {} of {}", self.similarity, self.level, self.levels)
    }
}
