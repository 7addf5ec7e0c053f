use edit_align::{align_intervals_hyp_to_ref, calc_wer_report, AlignmentScript};
use log::{error, info};

fn main() {
    env_logger::init();

    let reference: Vec<char> = "abbbacccaa".chars().collect();
    let hypothesis: Vec<char> = "abacaa".chars().collect();

    let script = AlignmentScript::compute(&reference, &hypothesis);
    info!("Edit vector: {}", script.edit_vector());

    match calc_wer_report(&reference, &hypothesis) {
        Ok(report) => println!("{:#?}", report),
        Err(e) => error!("Failed to compute WER: {}", e),
    }

    match align_intervals_hyp_to_ref(&hypothesis, &reference, &[(1, 1), (3, 3)]) {
        Ok(alignment) => {
            println!("Reference intervals: {:?}", alignment.projected_intervals);
            println!(
                "Hypothesis: {}",
                alignment.annotated_source.iter().collect::<String>()
            );
            println!(
                "Reference:  {}",
                alignment.annotated_target.iter().collect::<String>()
            );
        }
        Err(e) => error!("Failed to align intervals: {}", e),
    }
}
