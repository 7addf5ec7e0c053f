use csv::ReaderBuilder;
use std::error::Error;

/// A reference/hypothesis pair with its expected edit distance.
#[derive(Debug, Clone)]
pub struct AlignmentCase {
    pub reference: String,
    pub hypothesis: String,
    pub expected_distance: usize,
}

impl AlignmentCase {
    pub fn reference_chars(&self) -> Vec<char> {
        self.reference.chars().collect()
    }

    pub fn hypothesis_chars(&self) -> Vec<char> {
        self.hypothesis.chars().collect()
    }
}

/// Utility to load alignment cases from a CSV file for testing and benchmarking.
///
/// Rows are `reference,hypothesis,distance` after a header row.
pub fn load_alignment_cases_from_file(
    file_path: &str,
) -> Result<Vec<AlignmentCase>, Box<dyn Error>> {
    let mut cases = Vec::new();
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() == 3 {
            cases.push(AlignmentCase {
                reference: record[0].to_string(),
                hypothesis: record[1].to_string(),
                expected_distance: record[2].trim().parse()?,
            });
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(cases)
}

/// Every sequence over `alphabet` with length at most `max_len`, shortest first.
pub fn all_sequences(alphabet: &[char], max_len: usize) -> Vec<Vec<char>> {
    let mut sequences = vec![Vec::new()];
    let mut frontier: Vec<Vec<char>> = vec![Vec::new()];

    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &frontier {
            for &c in alphabet {
                let mut sequence = prefix.clone();
                sequence.push(c);
                next.push(sequence);
            }
        }
        sequences.extend(next.iter().cloned());
        frontier = next;
    }

    sequences
}
