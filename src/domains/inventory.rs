//! Inventory movements dataset (`inventario_produtos.csv`).

use massa_core::{round_to, DatasetSpec, Draw, FakeKind, FieldSpec, Row, Sampler, Value};

pub fn spec() -> DatasetSpec {
    DatasetSpec::new(
        "inventario",
        "inventario_produtos.csv",
        vec![
            FieldSpec::sampled(
                "SKU",
                Sampler::RandId { prefix: "SKU", min: 10_000, max: 99_999, width: 0 },
            ),
            FieldSpec::sampled("Nome_Produto", Sampler::Fake(FakeKind::Phrase { words: 3 })),
            FieldSpec::sampled(
                "Categoria",
                Sampler::weighted(
                    &["Eletrônicos", "Roupas", "Alimentos", "Ferramentas", "Móveis"],
                    &[0.25, 0.2, 0.2, 0.15, 0.2],
                ),
            ),
            FieldSpec::sampled("Fornecedor", Sampler::Fake(FakeKind::Company)),
            FieldSpec::sampled(
                "Quantidade_Estoque",
                Sampler::IntRange { min: 0, max: 10_000 },
            ),
            FieldSpec::sampled(
                "Valor_Unitario",
                Sampler::LogNormal { location: 5.0, scale: 1.5, decimals: 2 },
            ),
            FieldSpec::derived("Valor_Total", valor_total),
            FieldSpec::derived("Localizacao", localizacao),
            FieldSpec::sampled("Data_Ultima_Movimentacao", Sampler::DateWithinDays { back: 365 }),
            FieldSpec::sampled(
                "Tipo_Movimentacao",
                Sampler::weighted(
                    &["Entrada", "Saída", "Ajuste", "Transferência"],
                    &[0.3, 0.5, 0.15, 0.05],
                ),
            ),
            FieldSpec::sampled(
                "Quantidade_Movimentada",
                Sampler::IntRange { min: 1, max: 500 },
            ),
            FieldSpec::derived("Saldo_Apos_Movimentacao", saldo_apos_movimentacao),
            FieldSpec::sampled("Motivo", Sampler::Fake(FakeKind::Phrase { words: 4 })),
            FieldSpec::sampled("Responsavel", Sampler::Fake(FakeKind::FullName)),
            FieldSpec::derived("Data_Vencimento", data_vencimento).absent(0.7),
            FieldSpec::sampled(
                "Lote",
                Sampler::RandId { prefix: "LOTE", min: 1000, max: 9999, width: 0 },
            ),
            FieldSpec::sampled(
                "Status",
                Sampler::weighted(
                    &["Disponível", "Reservado", "Danificado", "Vencido"],
                    &[0.8, 0.1, 0.05, 0.05],
                ),
            ),
        ],
    )
}

fn valor_total(row: &Row, _ctx: &mut dyn Draw) -> Value {
    let estoque = row.get_f64("Quantidade_Estoque").unwrap_or(0.0);
    let unitario = row.get_f64("Valor_Unitario").unwrap_or(0.0);
    Value::Float(round_to(estoque * unitario, 2))
}

fn localizacao(_row: &Row, ctx: &mut dyn Draw) -> Value {
    Value::Text(format!(
        "Armazém {} - Prateleira {}",
        ctx.int_range(1, 10),
        ctx.int_range(1, 100)
    ))
}

/// The stock column already reflects the last movement.
fn saldo_apos_movimentacao(row: &Row, _ctx: &mut dyn Draw) -> Value {
    Value::Int(row.get_i64("Quantidade_Estoque").unwrap_or(0))
}

fn data_vencimento(row: &Row, ctx: &mut dyn Draw) -> Value {
    match row.get("Data_Ultima_Movimentacao").and_then(Value::as_date) {
        Some(movimentacao) => {
            Value::Date(movimentacao + chrono::Duration::days(ctx.int_range(30, 730)))
        }
        None => Value::Null,
    }
}
