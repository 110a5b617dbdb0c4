//! Cashflow ledger dataset (`financas_fluxo_caixa.csv`).
//!
//! The only dataset with cross-row state: each row opens with the balance
//! the previous row closed at. That makes its rows strictly sequential.

use massa_core::{round_to, DatasetSpec, Draw, FakeKind, FieldSpec, Row, Sampler, Value};

/// Balance the ledger starts from.
const SALDO_INICIAL: f64 = 100_000.0;

pub fn spec() -> DatasetSpec {
    DatasetSpec::new(
        "fluxo-caixa",
        "financas_fluxo_caixa.csv",
        vec![
            FieldSpec::sampled("Data", Sampler::DateWithinDays { back: 365 }),
            FieldSpec::sampled(
                "Tipo",
                Sampler::weighted(&["Entrada", "Saída"], &[0.45, 0.55]),
            ),
            FieldSpec::sampled("Descricao", Sampler::Fake(FakeKind::Phrase { words: 4 })),
            FieldSpec::derived("Valor", valor),
            FieldSpec::sampled(
                "Categoria",
                Sampler::weighted(
                    &["Vendas", "Salários", "Fornecedores", "Impostos", "Investimentos", "Despesas Operacionais"],
                    &[0.25, 0.2, 0.15, 0.1, 0.1, 0.2],
                ),
            ),
            FieldSpec::sampled("Subcategoria", Sampler::Fake(FakeKind::Word)),
            FieldSpec::sampled(
                "Conta",
                Sampler::weighted(
                    &["Conta Corrente", "Conta Poupança", "Caixa", "Investimentos"],
                    &[0.6, 0.2, 0.15, 0.05],
                ),
            ),
            FieldSpec::derived("Saldo_Anterior", saldo_anterior),
            FieldSpec::derived("Saldo_Apos", saldo_apos),
            FieldSpec::sampled("Responsavel", Sampler::Fake(FakeKind::FullName)),
            FieldSpec::sampled(
                "Comprovante",
                Sampler::RandId { prefix: "COMP", min: 100_000, max: 999_999, width: 0 },
            ),
            FieldSpec::sampled("Centro_Custo", Sampler::Fake(FakeKind::Word)),
            FieldSpec::sampled("Projeto", Sampler::Fake(FakeKind::Phrase { words: 2 }))
                .absent(0.7),
            FieldSpec::sampled(
                "Moeda",
                Sampler::weighted(&["BRL", "USD", "EUR"], &[0.95, 0.04, 0.01]),
            ),
            FieldSpec::derived("Taxa_Cambio", taxa_cambio),
            FieldSpec::sampled(
                "Previsao_Realizado",
                Sampler::choice(&["Realizado", "Previsão"]),
            ),
            FieldSpec::sampled("Observacoes", Sampler::Fake(FakeKind::Sentence)).absent(0.8),
        ],
    )
    .with_opening_balance(SALDO_INICIAL)
}

/// Inflows run larger than outflows.
fn valor(row: &Row, ctx: &mut dyn Draw) -> Value {
    let montante = if row.get_str("Tipo") == Some("Entrada") {
        ctx.log_normal(8.0, 1.2)
    } else {
        ctx.log_normal(7.0, 1.5)
    };
    Value::Float(round_to(montante, 2))
}

fn saldo_anterior(_row: &Row, ctx: &mut dyn Draw) -> Value {
    Value::Float(round_to(ctx.carry(), 2))
}

/// Applies the signed delta and threads the new balance to the next row.
fn saldo_apos(row: &Row, ctx: &mut dyn Draw) -> Value {
    let valor = row.get_f64("Valor").unwrap_or(0.0);
    let delta = if row.get_str("Tipo") == Some("Entrada") {
        valor
    } else {
        -valor
    };
    let novo = ctx.carry() + delta;
    ctx.set_carry(novo);
    Value::Float(round_to(novo, 2))
}

/// Foreign-currency rate on ~10% of the movements, 1.0 otherwise.
fn taxa_cambio(_row: &Row, ctx: &mut dyn Draw) -> Value {
    if ctx.chance(0.1) {
        Value::Float(round_to(ctx.uniform(1.0, 6.0), 4))
    } else {
        Value::Float(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use massa_generator::RowGenerator;

    #[test]
    fn test_balance_chain_is_prefix_consistent() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();
        let rows: Vec<_> = generator.rows(500).collect();

        assert_eq!(rows[0].get_f64("Saldo_Anterior"), Some(SALDO_INICIAL));

        for par in rows.windows(2) {
            assert_eq!(
                par[1].get_f64("Saldo_Anterior"),
                par[0].get_f64("Saldo_Apos"),
                "saldo deve encadear exatamente entre linhas"
            );
        }
    }

    #[test]
    fn test_delta_signs_follow_tipo() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();

        for row in generator.rows(500) {
            let anterior = row.get_f64("Saldo_Anterior").unwrap();
            let depois = row.get_f64("Saldo_Apos").unwrap();
            match row.get_str("Tipo").unwrap() {
                "Entrada" => assert!(depois >= anterior),
                "Saída" => assert!(depois <= anterior),
                tipo => panic!("tipo inesperado: {tipo}"),
            }
        }
    }

    #[test]
    fn test_valores_positive() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();
        for row in generator.rows(500) {
            assert!(row.get_f64("Valor").unwrap() > 0.0);
        }
    }
}
