//! Delivery logistics dataset (`logistica_entregas.csv`).

use massa_core::{DatasetSpec, Draw, FakeKind, FieldSpec, Row, Sampler, Value};

pub fn spec() -> DatasetSpec {
    DatasetSpec::new(
        "logistica",
        "logistica_entregas.csv",
        vec![
            FieldSpec::sampled("ID_Entrega", Sampler::SeqId { prefix: "ENT", width: 6 }),
            FieldSpec::sampled(
                "Pedido_ID",
                Sampler::RandId { prefix: "PED", min: 1, max: 10_000, width: 6 },
            ),
            FieldSpec::sampled(
                "Transportadora",
                Sampler::weighted(
                    &["Correios", "FedEx", "DHL", "Transportadora XYZ", "Jadlog"],
                    &[0.4, 0.2, 0.15, 0.15, 0.1],
                ),
            ),
            FieldSpec::sampled("Data_Saida", Sampler::DateWithinDays { back: 180 }),
            FieldSpec::derived("Data_Prevista", data_prevista),
            FieldSpec::derived("Data_Entrega", data_entrega).absent(0.1),
            FieldSpec::sampled(
                "Status",
                Sampler::weighted(
                    &["Entregue", "Em Trânsito", "Atrasado", "Extraviado", "Devolvido"],
                    &[0.7, 0.2, 0.05, 0.03, 0.02],
                ),
            ),
            FieldSpec::sampled(
                "Peso_Kg",
                Sampler::Normal { mean: 5.0, std_dev: 3.0, decimals: 2 },
            ),
            FieldSpec::sampled(
                "Volume_M3",
                Sampler::Normal { mean: 0.05, std_dev: 0.03, decimals: 3 },
            ),
            FieldSpec::sampled(
                "Valor_Frete",
                Sampler::Normal { mean: 25.0, std_dev: 15.0, decimals: 2 },
            ),
            FieldSpec::sampled("Destinatario", Sampler::Fake(FakeKind::FullName)),
            FieldSpec::sampled("Endereco", Sampler::Fake(FakeKind::StreetAddress)),
            FieldSpec::sampled("Cidade", Sampler::Fake(FakeKind::City)),
            FieldSpec::sampled("Estado", Sampler::Fake(FakeKind::StateAbbr)),
            FieldSpec::sampled("CEP", Sampler::Fake(FakeKind::Cep)),
            FieldSpec::sampled(
                "Rastreamento",
                Sampler::RandId { prefix: "BR", min: 100_000_000, max: 999_999_999, width: 0 },
            ),
            FieldSpec::sampled("Motivo_Atraso", Sampler::Fake(FakeKind::Sentence)).absent(0.85),
            FieldSpec::sampled("Tentativas_Entrega", Sampler::IntRange { min: 1, max: 3 }),
            FieldSpec::sampled("Responsavel", Sampler::Fake(FakeKind::FullName)),
        ],
    )
}

fn data_prevista(row: &Row, ctx: &mut dyn Draw) -> Value {
    match row.get("Data_Saida").and_then(Value::as_date) {
        Some(saida) => Value::Date(saida + chrono::Duration::days(ctx.int_range(1, 10))),
        None => Value::Null,
    }
}

/// Actual delivery lands up to two days early or five days late.
fn data_entrega(row: &Row, ctx: &mut dyn Draw) -> Value {
    match row.get("Data_Prevista").and_then(Value::as_date) {
        Some(prevista) => Value::Date(prevista + chrono::Duration::days(ctx.int_range(-2, 5))),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use massa_generator::RowGenerator;

    #[test]
    fn test_date_chain() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();

        for row in generator.rows(300) {
            let saida = row.get("Data_Saida").and_then(Value::as_date).unwrap();
            let prevista = row.get("Data_Prevista").and_then(Value::as_date).unwrap();
            assert!((1..=10).contains(&(prevista - saida).num_days()));

            if let Some(entrega) = row.get("Data_Entrega").and_then(Value::as_date) {
                assert!((-2..=5).contains(&(entrega - prevista).num_days()));
            }
        }
    }

    #[test]
    fn test_cep_shape() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();
        let row = generator.next_row();
        let cep = row.get_str("CEP").unwrap();
        assert_eq!(cep.len(), 9);
        assert_eq!(&cep[5..6], "-");
    }

    #[test]
    fn test_rastreamento_prefix() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();
        for row in generator.rows(50) {
            let codigo = row.get_str("Rastreamento").unwrap();
            assert!(codigo.starts_with("BR"));
            assert_eq!(codigo.len(), 11);
        }
    }
}
