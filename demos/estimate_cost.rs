use sewmrsms::{CostEstimate, segment};

fn main() {
    let message = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Karibu SewMR SMS, bei yake ni €1".to_owned());
    let recipients = std::env::args()
        .nth(2)
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(1);

    let segmentation = segment(&message);
    println!(
        "encoding: {:?}, units: {}, parts: {}, units_per_part: {}, room left: {}",
        segmentation.encoding,
        segmentation.units,
        segmentation.parts,
        segmentation.units_per_part,
        segmentation.remaining_in_last_part()
    );

    let estimate = CostEstimate::new(segmentation, recipients);
    println!(
        "{} recipient(s) x {} part(s) = {} credit(s)",
        estimate.recipients, segmentation.parts, estimate.credits
    );
}
