//! Accounting/controllership postings dataset (`controladoria_contabilidade.csv`).

use massa_core::{round_to, DatasetSpec, Draw, FakeKind, FieldSpec, Row, Sampler, Value};

pub fn spec() -> DatasetSpec {
    DatasetSpec::new(
        "controladoria",
        "controladoria_contabilidade.csv",
        vec![
            FieldSpec::sampled("Data_Lancamento", Sampler::DateWithinDays { back: 365 }),
            FieldSpec::sampled(
                "Conta_Debito",
                Sampler::RandId { prefix: "1.", min: 1000, max: 9999, width: 0 },
            ),
            FieldSpec::sampled(
                "Conta_Credito",
                Sampler::RandId { prefix: "2.", min: 1000, max: 9999, width: 0 },
            ),
            FieldSpec::sampled(
                "Valor",
                Sampler::LogNormal { location: 8.0, scale: 1.5, decimals: 2 },
            ),
            FieldSpec::sampled("Historico", Sampler::Fake(FakeKind::Phrase { words: 5 })),
            FieldSpec::sampled(
                "Tipo_Lancamento",
                Sampler::weighted(
                    &["Receita", "Despesa", "Transferência", "Ajuste"],
                    &[0.4, 0.45, 0.1, 0.05],
                ),
            ),
            FieldSpec::sampled(
                "Centro_Custo",
                Sampler::weighted(
                    &["Vendas", "Administrativo", "Produção", "Logística", "Marketing"],
                    &[0.3, 0.2, 0.25, 0.15, 0.1],
                ),
            ),
            FieldSpec::sampled(
                "Filial",
                Sampler::RandId { prefix: "FIL", min: 1, max: 50, width: 2 },
            ),
            FieldSpec::sampled(
                "Documento",
                Sampler::RandId { prefix: "DOC", min: 100_000, max: 999_999, width: 0 },
            ),
            FieldSpec::derived("Fornecedor_Cliente", fornecedor_cliente),
            FieldSpec::sampled(
                "Moeda",
                Sampler::weighted(&["BRL", "USD", "EUR"], &[0.9, 0.08, 0.02]),
            ),
            FieldSpec::derived("Taxa_Cambio", taxa_cambio),
            FieldSpec::derived("Competencia", competencia),
            FieldSpec::sampled("Usuario", Sampler::Fake(FakeKind::FullName)),
            FieldSpec::derived("Aprovado", |_row, ctx| Value::Bool(ctx.chance(0.5))),
            FieldSpec::sampled("Observacoes", Sampler::Fake(FakeKind::Sentence)).absent(0.7),
            FieldSpec::sampled("Categoria", Sampler::Fake(FakeKind::Word)),
            FieldSpec::sampled("Subcategoria", Sampler::Fake(FakeKind::Word)),
        ],
    )
}

/// Half of the postings name a company, the other half a person.
fn fornecedor_cliente(_row: &Row, ctx: &mut dyn Draw) -> Value {
    let kind = if ctx.chance(0.5) {
        FakeKind::Company
    } else {
        FakeKind::FullName
    };
    Value::Text(ctx.fake(&kind))
}

/// Foreign-currency rate on ~10% of postings, 1.0 otherwise.
fn taxa_cambio(_row: &Row, ctx: &mut dyn Draw) -> Value {
    if ctx.chance(0.1) {
        Value::Float(round_to(ctx.uniform(1.0, 6.0), 4))
    } else {
        Value::Float(1.0)
    }
}

/// `YYYY-MM` accounting period of the posting date.
fn competencia(row: &Row, _ctx: &mut dyn Draw) -> Value {
    match row.get("Data_Lancamento").and_then(Value::as_date) {
        Some(data) => Value::Text(data.format("%Y-%m").to_string()),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use massa_generator::RowGenerator;

    #[test]
    fn test_competencia_matches_lancamento() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();

        for row in generator.rows(200) {
            let data = row.get("Data_Lancamento").and_then(Value::as_date).unwrap();
            assert_eq!(
                row.get_str("Competencia").unwrap(),
                data.format("%Y-%m").to_string()
            );
        }
    }

    #[test]
    fn test_taxa_cambio_defaults_to_one() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();

        let n = 2000;
        let unitarias = generator
            .rows(n)
            .filter(|row| row.get_f64("Taxa_Cambio") == Some(1.0))
            .count();

        // ~90% should be the domestic-rate default.
        let rate = unitarias as f64 / n as f64;
        assert!(rate > 0.85 && rate < 0.95, "taxa 1.0 em {rate}");
    }

    #[test]
    fn test_account_code_shapes() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();

        for row in generator.rows(100) {
            assert!(row.get_str("Conta_Debito").unwrap().starts_with("1."));
            assert!(row.get_str("Conta_Credito").unwrap().starts_with("2."));
        }
    }
}
