//! E-commerce sales dataset (`vendas_ecommerce.csv`).

use massa_core::{round_to, DatasetSpec, Draw, FakeKind, FieldSpec, Row, Sampler, Value};

pub fn spec() -> DatasetSpec {
    DatasetSpec::new(
        "ecommerce",
        "vendas_ecommerce.csv",
        vec![
            FieldSpec::sampled("ID_Pedido", Sampler::SeqId { prefix: "PED", width: 6 }),
            FieldSpec::sampled("Data_Pedido", Sampler::DateWithinDays { back: 730 }),
            FieldSpec::sampled(
                "Cliente_ID",
                Sampler::RandId { prefix: "CLI", min: 1, max: 10_000, width: 5 },
            ),
            FieldSpec::sampled("Produto", Sampler::Fake(FakeKind::Phrase { words: 3 })),
            FieldSpec::derived("Quantidade", quantidade),
            FieldSpec::sampled(
                "Preco_Unitario",
                Sampler::Normal { mean: 150.0, std_dev: 80.0, decimals: 2 },
            ),
            // Declared before Frete/Desconto; evaluated after them (stage 2).
            FieldSpec::derived("Total", total).stage(2),
            FieldSpec::sampled(
                "Status",
                Sampler::weighted(
                    &["Concluído", "Pendente", "Cancelado", "Devolvido"],
                    &[0.75, 0.15, 0.08, 0.02],
                ),
            ),
            FieldSpec::sampled(
                "Metodo_Pagamento",
                Sampler::weighted(
                    &["Cartão de Crédito", "Boleto", "PIX", "Transferência"],
                    &[0.5, 0.25, 0.2, 0.05],
                ),
            ),
            FieldSpec::sampled(
                "Frete",
                Sampler::Normal { mean: 15.0, std_dev: 8.0, decimals: 2 },
            ),
            FieldSpec::derived("Desconto", desconto),
            FieldSpec::sampled(
                "Canal_Venda",
                Sampler::weighted(
                    &["Site", "App Mobile", "Marketplace", "Loja Física"],
                    &[0.4, 0.3, 0.2, 0.1],
                ),
            ),
            FieldSpec::sampled("Cidade", Sampler::Fake(FakeKind::City)),
            FieldSpec::sampled("Estado", Sampler::Fake(FakeKind::StateAbbr)),
            FieldSpec::sampled("Avaliacao", Sampler::IntRange { min: 1, max: 5 }).absent(0.3),
            FieldSpec::derived("Data_Entrega", data_entrega).absent(0.1),
            FieldSpec::sampled("Motivo_Cancelamento", Sampler::Fake(FakeKind::Sentence))
                .absent(0.9),
            FieldSpec::derived("Valor_Devolvido", valor_devolvido).stage(3),
            FieldSpec::sampled(
                "Categoria_Produto",
                Sampler::weighted(
                    &["Eletrônicos", "Roupas", "Casa e Jardim", "Livros", "Esportes"],
                    &[0.3, 0.25, 0.2, 0.15, 0.1],
                ),
            ),
            FieldSpec::sampled(
                "SKU",
                Sampler::RandId { prefix: "SKU", min: 10_000, max: 99_999, width: 0 },
            ),
        ],
    )
}

/// Units per order, floored at 1.
fn quantidade(_row: &Row, ctx: &mut dyn Draw) -> Value {
    Value::Int((ctx.normal(2.0, 1.5) as i64).max(1))
}

/// 30% of orders get a discount of up to 30% of the unit price.
fn desconto(row: &Row, ctx: &mut dyn Draw) -> Value {
    if !ctx.chance(0.3) {
        return Value::Float(0.0);
    }
    let preco = row.get_f64("Preco_Unitario").unwrap_or(0.0);
    Value::Float(round_to(uniform_to(ctx, preco * 0.3), 2))
}

fn total(row: &Row, _ctx: &mut dyn Draw) -> Value {
    let quantidade = row.get_f64("Quantidade").unwrap_or(0.0);
    let preco = row.get_f64("Preco_Unitario").unwrap_or(0.0);
    let frete = row.get_f64("Frete").unwrap_or(0.0);
    let desconto = row.get_f64("Desconto").unwrap_or(0.0);
    Value::Float(round_to(quantidade * preco + frete - desconto, 2))
}

fn data_entrega(row: &Row, ctx: &mut dyn Draw) -> Value {
    match row.get("Data_Pedido").and_then(Value::as_date) {
        Some(pedido) => Value::Date(pedido + chrono::Duration::days(ctx.int_range(1, 15))),
        None => Value::Null,
    }
}

/// 5% of orders register a partial or full refund.
fn valor_devolvido(row: &Row, ctx: &mut dyn Draw) -> Value {
    if !ctx.chance(0.05) {
        return Value::Float(0.0);
    }
    let total = row.get_f64("Total").unwrap_or(0.0);
    Value::Float(round_to(uniform_to(ctx, total), 2))
}

/// Uniform draw between 0 and `bound`, tolerating a negative bound (price
/// noise can push totals below zero).
fn uniform_to(ctx: &mut dyn Draw, bound: f64) -> f64 {
    if bound < 0.0 {
        ctx.uniform(bound, 0.0)
    } else {
        ctx.uniform(0.0, bound)
    }
}
