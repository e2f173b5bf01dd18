/// An organization owning zero or more vehicles. `name` is unique within
/// the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Client {
    pub name: String,
    pub contact_name: String,
    pub contact_email: String,
}

/// A single piece of equipment. `vin` is unique within the store.
///
/// `client` is a foreign key by value only: nothing stops a vehicle from
/// referencing a client record that no longer exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vehicle {
    pub vin: String,
    pub client: String,
    pub mileage: u64,
}

/// One recorded weighing of a vehicle. Insertion order carries no meaning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightSample {
    pub weight: f64,
}

impl WeightSample {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

/// Running maximum over a sample list. An empty list yields `0.0` by
/// convention, not an error.
pub fn largest_weight(samples: &[WeightSample]) -> f64 {
    samples
        .iter()
        .fold(0.0_f64, |max, sample| max.max(sample.weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_weight_takes_running_maximum() {
        let samples = [
            WeightSample::new(32.1),
            WeightSample::new(106.0),
            WeightSample::new(5.36),
        ];
        assert_eq!(largest_weight(&samples), 106.0);
    }

    #[test]
    fn largest_weight_of_empty_list_is_zero() {
        assert_eq!(largest_weight(&[]), 0.0);
    }
}
