use rand::Rng;

use crate::neuron::Neuron;
use crate::train::example::TrainingExample;

/// Draws `count` input vectors uniformly from `[0, 1]^d` and labels each one
/// with `reference.classify`.
///
/// Handy for showing a freshly reset neuron learning another neuron's rule.
pub fn synthetic_examples<R: Rng + ?Sized>(
    reference: &Neuron,
    count: usize,
    rng: &mut R,
) -> Vec<TrainingExample> {
    let dims = reference.dimensions();
    (0..count)
        .map(|_| {
            let inputs: Vec<f64> = (0..dims).map(|_| rng.gen::<f64>()).collect();
            let positive = crate::activation::is_positive(reference.forward(&inputs));
            TrainingExample::new(inputs, positive)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neuron::presets;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn labels_follow_the_reference() {
        let reference = presets::meeting_host();
        let mut rng = StdRng::seed_from_u64(7);
        let examples = synthetic_examples(&reference, 64, &mut rng);

        assert_eq!(examples.len(), 64);
        for example in &examples {
            assert_eq!(example.inputs.len(), 4);
            assert!(example.inputs.iter().all(|v| (0.0..1.0).contains(v)));
            assert_eq!(example.is_positive(), reference.classify(&example.inputs).unwrap());
        }
    }

    #[test]
    fn same_seed_same_examples() {
        let reference = presets::schedule_soon();
        let a = synthetic_examples(&reference, 10, &mut StdRng::seed_from_u64(3));
        let b = synthetic_examples(&reference, 10, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
