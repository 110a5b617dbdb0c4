//! Locale-aware fake-data provider (Brazilian Portuguese).
//!
//! Names, companies, cities, e-mails, job titles and lorem text come from
//! the `fake` crate's PT_BR fakers. Brazilian document numbers (CPF, CNPJ,
//! CEP, phone) are digit-template fills: the shapes are right, the check
//! digits are not computed. Downstream consumers treat them as opaque
//! identifier-shaped strings.

use fake::faker::address::raw::{BuildingNumber, CityName, StreetName};
use fake::faker::company::raw::CompanyName;
use fake::faker::internet::raw::FreeEmail;
use fake::faker::job::raw::Title;
use fake::faker::lorem::raw::{Sentence, Word};
use fake::faker::name::raw::Name;
use fake::locales::PT_BR;
use fake::Fake;
use massa_core::FakeKind;
use rand::seq::SliceRandom;
use rand::Rng;

/// The 27 Brazilian federative unit codes.
const UFS: &[&str] = &[
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
    "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Dispatch a fake-data request to the provider.
pub fn fake_value<R: Rng>(rng: &mut R, kind: &FakeKind) -> String {
    match kind {
        FakeKind::FullName => Name(PT_BR).fake_with_rng(rng),
        FakeKind::Company => CompanyName(PT_BR).fake_with_rng(rng),
        FakeKind::City => CityName(PT_BR).fake_with_rng(rng),
        FakeKind::StateAbbr => state_abbr(rng),
        FakeKind::Email => FreeEmail(PT_BR).fake_with_rng(rng),
        FakeKind::Phone => digits(rng, "(##) 9####-####"),
        FakeKind::Cpf => digits(rng, "###.###.###-##"),
        FakeKind::Cnpj => digits(rng, "##.###.###/####-##"),
        FakeKind::Cep => digits(rng, "#####-###"),
        FakeKind::StreetAddress => street_address(rng),
        FakeKind::JobTitle => Title(PT_BR).fake_with_rng(rng),
        FakeKind::Word => Word(PT_BR).fake_with_rng(rng),
        FakeKind::Phrase { words } => phrase(rng, *words),
        FakeKind::Sentence => Sentence(PT_BR, 4..9).fake_with_rng(rng),
    }
}

/// A random federative unit code.
pub fn state_abbr<R: Rng>(rng: &mut R) -> String {
    UFS.choose(rng)
        .expect("the federative unit table is not empty")
        .to_string()
}

/// Street name plus building number.
pub fn street_address<R: Rng>(rng: &mut R) -> String {
    let street: String = StreetName(PT_BR).fake_with_rng(rng);
    let number: String = BuildingNumber(PT_BR).fake_with_rng(rng);
    format!("{street}, {number}")
}

/// Short lorem phrase without the trailing period, for product and
/// campaign names.
pub fn phrase<R: Rng>(rng: &mut R, words: usize) -> String {
    let sentence: String = Sentence(PT_BR, words..words + 1).fake_with_rng(rng);
    sentence.trim_end_matches('.').to_string()
}

/// Fill a digit template, replacing each `#` with a random digit.
pub fn digits<R: Rng>(rng: &mut R, template: &str) -> String {
    template
        .chars()
        .map(|c| {
            if c == '#' {
                char::from_digit(rng.gen_range(0..10), 10).expect("single digit")
            } else {
                c
            }
        })
        .collect()
}
