//! Thin server-rendered views. The real presentation layer is an external
//! concern; these pages carry just enough markup for the flows to be
//! usable and testable.

use axum::http::StatusCode;
use shared::{Campground, Review};

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn home() -> String {
    layout(
        "Campground Registry",
        "<h1>Campground Registry</h1>\n<p><a href=\"/campgrounds\">Browse campgrounds</a></p>",
    )
}

pub fn campground_list(campgrounds: &[Campground]) -> String {
    let mut body = String::from("<h1>All Campgrounds</h1>\n<p><a href=\"/campgrounds/new\">Add Campground</a></p>\n<ul>\n");
    for campground in campgrounds {
        body.push_str(&format!(
            "<li><a href=\"/campgrounds/{}\">{}</a> &mdash; {}</li>\n",
            campground.id,
            escape(&campground.title),
            escape(&campground.location),
        ));
    }
    body.push_str("</ul>");
    layout("All Campgrounds", &body)
}

pub fn campground_detail(campground: &Campground, reviews: &[Review]) -> String {
    let mut body = format!(
        "<h1>{title}</h1>\n\
         <p>{location}</p>\n\
         <img src=\"{image}\" alt=\"{title}\">\n\
         <p>{description}</p>\n\
         <p>${price}/night</p>\n\
         <p><a href=\"/campgrounds/{id}/edit\">Edit</a> | <a href=\"/campgrounds\">Back to all campgrounds</a></p>\n\
         <h2>Reviews</h2>\n<ul>\n",
        title = escape(&campground.title),
        location = escape(&campground.location),
        image = escape(&campground.image),
        description = escape(&campground.description),
        price = campground.price,
        id = campground.id,
    );
    for review in reviews {
        body.push_str(&format!(
            "<li>Rating: {} &mdash; {}</li>\n",
            review.rating,
            escape(&review.body),
        ));
    }
    body.push_str("</ul>");
    layout(&campground.title, &body)
}

pub fn new_form() -> String {
    layout(
        "New Campground",
        "<h1>New Campground</h1>\n<p>Submit a campground payload to POST /campgrounds.</p>\n\
         <p><a href=\"/campgrounds\">Back to all campgrounds</a></p>",
    )
}

pub fn edit_form(campground: &Campground) -> String {
    let body = format!(
        "<h1>Edit {title}</h1>\n<p>Submit an updated payload to PUT /campgrounds/{id}.</p>\n\
         <p><a href=\"/campgrounds/{id}\">Back to {title}</a></p>",
        title = escape(&campground.title),
        id = campground.id,
    );
    layout("Edit Campground", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>{} {}</h1>\n<p>{}</p>\n<p><a href=\"/campgrounds\">Back to all campgrounds</a></p>",
        status.as_u16(),
        escape(status.canonical_reason().unwrap_or("Error")),
        escape(message),
    );
    layout("Error", &body)
}
