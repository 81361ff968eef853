//! Terminal rendering of catalog views and product details.

use colored::Colorize;
use engine::CatalogView;
use pipeline::{CategorySelection, ProductDetail};

/// Print the ranked product list, or the empty-state message.
pub fn print_view(view: &CatalogView<'_>, category: &CategorySelection, min_rating: u8) {
    let query = if view.query.is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", view.query)
    };
    println!(
        "{} busca: {}  categoria: {}  nota mínima: {}",
        "Catálogo".bold().blue(),
        query,
        category,
        min_rating
    );

    if let Some(message) = view.empty_state_message() {
        println!("{}", message.yellow());
        return;
    }

    for (rank, candidate) in view.products.iter().enumerate() {
        let product = candidate.product;
        println!(
            "{}. {} [{}] {} - {} ({} avaliações)",
            (rank + 1).to_string().green(),
            product.name.bold(),
            product.id,
            product.brand,
            format!("{:.1}★", candidate.avg_rating).yellow(),
            product.reviews.len()
        );
        println!("   {}", product.category.dimmed());
    }
}

/// Print the category options, sentinel first.
pub fn print_categories(categories: &[CategorySelection]) {
    println!("{}", "Categorias:".bold().blue());
    for category in categories {
        println!("{}{}", "• ".green(), category);
    }
}

/// Print everything the detail view shows for one product.
pub fn print_detail(detail: &ProductDetail<'_>) {
    let product = detail.product;

    println!("{}", product.name.bold().blue());
    println!("{}Marca: {}", "• ".green(), product.brand);
    println!("{}Categoria: {}", "• ".green(), product.category);
    println!(
        "{}Nota média: {:.1} ({} avaliações)",
        "• ".green(),
        detail.avg_rating,
        detail.review_count
    );
    if !product.skin_types.is_empty() {
        println!("{}Tipos de pele: {}", "• ".green(), product.skin_types.join(", "));
    }
    println!("{}Modo de uso: {}", "• ".green(), product.how_to_use);

    println!("{}", "Ingredientes (INCI):".bold());
    for ingredient in &product.ingredients {
        let mut flags = Vec::new();
        if ingredient.is_active() {
            flags.push("ativo".green().to_string());
        }
        if ingredient.is_allergenic() {
            flags.push("alergênico".red().to_string());
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        println!("  - {} ({}){}", ingredient.name, ingredient.role, flags);
        for reason in ingredient.controversy_reasons() {
            println!("      {} {}", "⚠".yellow(), reason);
        }
    }

    if detail.has_warnings() {
        println!(
            "{} {} alergênico(s), {} controverso(s)",
            "Atenção:".yellow().bold(),
            detail.allergens.len(),
            detail.controversial.len()
        );
    }

    println!("{}", "Avaliações:".bold());
    if product.reviews.is_empty() {
        println!("  {}", "Nenhuma avaliação ainda.".dimmed());
    }
    for review in &product.reviews {
        println!("  {} {} - {}", format!("{}★", review.rating).yellow(), review.author, review.comment);
    }
}
