use oneof_types::{Alternatives, Implicit, Rank, ordinal_of, rank_of};

struct Celsius(f64);
struct Fahrenheit(f64);

impl Implicit<Celsius> for Fahrenheit {
    fn convert(self) -> Celsius {
        Celsius((self.0 - 32.0) * 5.0 / 9.0)
    }
}

type Reading = Alternatives![u8, Celsius, String];

const CELSIUS: usize = ordinal_of::<Reading, Fahrenheit, _>();

fn main() {
    assert_eq!(CELSIUS, 1);
    assert_eq!(ordinal_of::<Reading, &u8, _>(), 0);
    assert_eq!(ordinal_of::<Reading, &str, _>(), 2);
    assert_eq!(rank_of::<Reading, Fahrenheit, _>(), Rank::Convertible);
    let _ = Celsius(0.0).0;
}
