//! Supplier registry dataset (`fornecedores_compras.csv`).

use massa_core::{round_to, DatasetSpec, Draw, FakeKind, FieldSpec, Row, Sampler, Value};

pub fn spec() -> DatasetSpec {
    DatasetSpec::new(
        "fornecedores",
        "fornecedores_compras.csv",
        vec![
            FieldSpec::sampled("ID_Fornecedor", Sampler::SeqId { prefix: "FOR", width: 5 }),
            FieldSpec::sampled("Nome_Empresa", Sampler::Fake(FakeKind::Company)),
            FieldSpec::sampled("CNPJ", Sampler::Fake(FakeKind::Cnpj)),
            FieldSpec::sampled("Contato", Sampler::Fake(FakeKind::FullName)),
            FieldSpec::sampled("Email", Sampler::Fake(FakeKind::Email)),
            FieldSpec::sampled("Telefone", Sampler::Fake(FakeKind::Phone)),
            FieldSpec::sampled(
                "Categoria",
                Sampler::weighted(
                    &["Matéria Prima", "Serviços", "Equipamentos", "Software", "Logística"],
                    &[0.3, 0.2, 0.2, 0.15, 0.15],
                ),
            ),
            FieldSpec::sampled(
                "Prazo_Pagamento",
                Sampler::weighted(
                    &["À vista", "15 dias", "30 dias", "45 dias", "60 dias"],
                    &[0.2, 0.3, 0.3, 0.15, 0.05],
                ),
            ),
            // Declared before Ultima_Compra but depends on it (stage 2).
            FieldSpec::derived("Valor_Total_Compras", valor_total_compras).stage(2),
            FieldSpec::derived("Ultima_Compra", ultima_compra).absent(0.1),
            FieldSpec::sampled(
                "Status",
                Sampler::weighted(
                    &["Ativo", "Inativo", "Suspenso", "Preferencial"],
                    &[0.75, 0.15, 0.05, 0.05],
                ),
            ),
            FieldSpec::sampled(
                "Avaliacao",
                Sampler::Uniform { min: 1.0, max: 5.0, decimals: 1 },
            ),
            FieldSpec::sampled(
                "Condicoes_Pagamento",
                Sampler::choice(&["Boleto", "Transferência", "Cartão", "Cheque"]),
            ),
            FieldSpec::sampled(
                "Desconto_Medio",
                Sampler::Uniform { min: 0.0, max: 15.0, decimals: 2 },
            ),
            FieldSpec::derived("Produtos_Fornecidos", produtos_fornecidos),
            FieldSpec::sampled("Cidade", Sampler::Fake(FakeKind::City)),
            FieldSpec::sampled("Estado", Sampler::Fake(FakeKind::StateAbbr)),
            FieldSpec::sampled("Data_Cadastro", Sampler::DateWithinDays { back: 3650 }),
        ],
    )
}

fn ultima_compra(row: &Row, ctx: &mut dyn Draw) -> Value {
    match row.get("Data_Cadastro").and_then(Value::as_date) {
        Some(cadastro) => Value::Date(cadastro + chrono::Duration::days(ctx.int_range(0, 1095))),
        None => Value::Null,
    }
}

/// No purchases without a purchase date.
fn valor_total_compras(row: &Row, ctx: &mut dyn Draw) -> Value {
    if row.get("Ultima_Compra").is_some_and(|v| !v.is_null()) {
        Value::Float(round_to(ctx.log_normal(10.0, 1.5), 2))
    } else {
        Value::Float(0.0)
    }
}

/// One to five supplied product keywords.
fn produtos_fornecidos(_row: &Row, ctx: &mut dyn Draw) -> Value {
    let contagem = ctx.int_range(1, 5);
    let palavras: Vec<String> = (0..contagem).map(|_| ctx.fake(&FakeKind::Word)).collect();
    Value::Text(palavras.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use massa_generator::RowGenerator;

    #[test]
    fn test_no_purchase_date_means_zero_total() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();

        for row in generator.rows(500) {
            if row.get("Ultima_Compra").unwrap().is_null() {
                assert_eq!(row.get_f64("Valor_Total_Compras"), Some(0.0));
            } else {
                assert!(row.get_f64("Valor_Total_Compras").unwrap() > 0.0);
            }
        }
    }

    #[test]
    fn test_ultima_compra_not_before_cadastro() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();

        for row in generator.rows(300) {
            if let Some(ultima) = row.get("Ultima_Compra").and_then(Value::as_date) {
                let cadastro = row.get("Data_Cadastro").and_then(Value::as_date).unwrap();
                assert!(ultima >= cadastro);
            }
        }
    }

    #[test]
    fn test_produtos_list_bounded() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();

        for row in generator.rows(200) {
            let contagem = row.get_str("Produtos_Fornecidos").unwrap().split(", ").count();
            assert!((1..=5).contains(&contagem));
        }
    }
}
