/*
 * The $1 Unistroke Recognizer and Protractor (rust version)
 *
 * Original authors:
 *
 *	    Jacob O. Wobbrock, Ph.D.
 * 	    The Information School
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    wobbrock@uw.edu
 *
 *	    Andrew D. Wilson, Ph.D.
 *	    Microsoft Research
 *	    One Microsoft Way
 *	    Redmond, WA 98052
 *	    awilson@microsoft.com
 *
 *	    Yang Li, Ph.D.
 *	    Department of Computer Science and Engineering
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    yangli@cs.washington.edu
 *
 * The academic publications for the $1 recognizer and for Protractor,
 * and what should be used to cite them, are:
 *
 *	Wobbrock, J.O., Wilson, A.D. and Li, Y. (2007). Gestures without
 *	  libraries, toolkits or training: A $1 recognizer for user interface
 *	  prototypes. Proceedings of the ACM Symposium on User Interface
 *	  Software and Technology (UIST '07). Newport, Rhode Island
 *	  (October 7-10, 2007). New York: ACM Press, pp. 159-168.
 *
 *	Li, Y. (2010). Protractor: A fast and accurate gesture recognizer.
 *	  Proceedings of the ACM Conference on Human Factors in Computing
 *	  Systems (CHI '10). Atlanta, Georgia (April 10-15, 2010).
 *	  New York: ACM Press, pp. 2169-2172.
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (c) 2007-2012, Jacob O. Wobbrock, Andrew D. Wilson and Yang Li.
 * All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the names of the University of Washington nor Microsoft,
 *      nor the names of its contributors may be used to endorse or promote
 *      products derived from this software without specific prior written
 *      permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Jacob O. Wobbrock OR Andrew D. Wilson
 * OR Yang Li OR Ferran Pujol Camins BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL,
 * EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT
 * OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
 * INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
 * STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
 * OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
 * SUCH DAMAGE.
**/

use crate::{
    error::{RecognizerError, Result},
    geometry,
    parameters::RecognizerParameters,
    point::Point,
};

/// A side of the rotated bounding box shorter than this fraction of the other side
/// means the stroke is a straight line and cannot be scaled to a square.
const DEGENERATE_ASPECT_RATIO: f32 = 1e-4;

/// A stroke in canonical form: resampled, rotated to its indicative angle,
/// scaled to the reference square and centered on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedStroke {
    /// Canonical points, always `num_points` of them
    pub points: Vec<Point>,
    /// The canonical points flattened to (x0, y0, x1, y1, ...) and scaled to unit length
    pub vector: Vec<f32>,
}

impl NormalizedStroke {
    /// Runs the full normalization pipeline over a raw stroke
    pub fn new(raw: &[Point], params: &RecognizerParameters) -> Result<Self> {
        validate(raw)?;
        let points = resample(raw, params.num_points)?;
        let radians = indicative_angle(&points);
        let points = rotate_by(&points, -radians);
        let points = scale_to(&points, params.square_size)?;
        let points = translate_to(&points, &Point::ORIGIN);
        let vector = vectorize(&points)?;
        Ok(Self { points, vector })
    }
}

fn validate(points: &[Point]) -> Result<()> {
    if points.len() < 2 {
        return Err(RecognizerError::TooFewPoints { len: points.len() });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(RecognizerError::NonFinitePoint { index });
    }
    Ok(())
}

/// Resamples the array of points into n points equally spaced along the path.
///
/// The walk keeps a cursor on the last emitted point: after an emission, the rest
/// of the current segment is measured from the new point rather than from the
/// segment's original start. The output always has exactly n points; if rounding
/// leaves it short, it is padded with the last input point.
pub fn resample(points: &[Point], n: usize) -> Result<Vec<Point>> {
    if n < 2 {
        return Err(RecognizerError::InvalidParameters {
            reason: "a stroke must be resampled to at least 2 points",
        });
    }
    validate(points)?;
    let length = geometry::path_length(points);
    if length <= 0.0 {
        return Err(RecognizerError::ZeroLength);
    }

    let interval = length / (n as f32 - 1.0);
    let mut resampled = Vec::with_capacity(n);
    resampled.push(points[0]);

    let mut d = 0.0;
    let mut prev = points[0];
    'walk: for &next in &points[1..] {
        loop {
            if resampled.len() >= n {
                break 'walk;
            }
            let dist = geometry::euclidean_distance(&prev, &next);
            if d + dist >= interval && dist > 0.0 {
                let t = (interval - d) / dist;
                let q = Point::new(
                    prev.x + t * (next.x - prev.x),
                    prev.y + t * (next.y - prev.y),
                );
                resampled.push(q);
                prev = q;
                d = 0.0;
            } else {
                d += dist;
                prev = next;
                break;
            }
        }
    }

    // sometimes we fall a rounding-error short of adding the last point
    let last = points[points.len() - 1];
    while resampled.len() < n {
        resampled.push(last);
    }
    Ok(resampled)
}

/// Angle from the first point to the centroid, in radians
pub fn indicative_angle(points: &[Point]) -> f32 {
    let c = geometry::centroid(points);
    (c.y - points[0].y).atan2(c.x - points[0].x)
}

/// Rotates the points by the given angle about their centroid
pub fn rotate_by(points: &[Point], radians: f32) -> Vec<Point> {
    let c = geometry::centroid(points);
    let (sin, cos) = radians.sin_cos();
    points
        .iter()
        .map(|p| {
            Point::new(
                (p.x - c.x) * cos - (p.y - c.y) * sin + c.x,
                (p.x - c.x) * sin + (p.y - c.y) * cos + c.y,
            )
        })
        .collect()
}

/// Scales x and y independently so the bounding box becomes a size x size square.
/// The aspect ratio is not preserved.
pub fn scale_to(points: &[Point], size: f32) -> Result<Vec<Point>> {
    let bbox = geometry::bounding_box(points);
    let (width, height) = (bbox.width(), bbox.height());
    let longest = width.max(height);
    if !(longest > 0.0) || width.min(height) <= longest * DEGENERATE_ASPECT_RATIO {
        return Err(RecognizerError::DegenerateBoundingBox { width, height });
    }
    let (sx, sy) = (size / width, size / height);
    Ok(points.iter().map(|p| Point::new(p.x * sx, p.y * sy)).collect())
}

/// Translates the points so that their centroid lands on `target`
pub fn translate_to(points: &[Point], target: &Point) -> Vec<Point> {
    let c = geometry::centroid(points);
    points
        .iter()
        .map(|p| Point::new(p.x + target.x - c.x, p.y + target.y - c.y))
        .collect()
}

/// Flattens the points into (x0, y0, x1, y1, ...) and divides by the Euclidean norm
pub fn vectorize(points: &[Point]) -> Result<Vec<f32>> {
    let sum: f32 = points.iter().map(|p| p.x * p.x + p.y * p.y).sum();
    let magnitude = sum.sqrt();
    if !(magnitude > 0.0) {
        return Err(RecognizerError::ZeroMagnitude);
    }
    Ok(points
        .iter()
        .flat_map(|p| [p.x / magnitude, p.y / magnitude])
        .collect())
}
