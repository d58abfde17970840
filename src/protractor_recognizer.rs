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

/// Protractor's closed-form distance between two unit vectors.
/// Computes the rotation that best aligns v2 with v1 analytically and returns
/// the angle between the vectors at that rotation, in [0, PI].
pub fn optimal_cosine_distance(v1: &[f32], v2: &[f32]) -> f32 {
    debug_assert_eq!(v1.len(), v2.len());
    let mut a = 0.0;
    let mut b = 0.0;
    for (p, q) in v1.chunks_exact(2).zip(v2.chunks_exact(2)) {
        a += p[0] * q[0] + p[1] * q[1];
        b += p[0] * q[1] - p[1] * q[0];
    }
    if a == 0.0 && b == 0.0 {
        return std::f32::consts::FRAC_PI_2;
    }
    let angle = (b / a).atan();
    // rounding can push a perfect match slightly past 1
    (a * angle.cos() + b * angle.sin()).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{normalize::vectorize, point::Point};

    fn unit(points: &[(f32, f32)]) -> Vec<f32> {
        let points: Vec<Point> = points.iter().copied().map(Point::from).collect();
        vectorize(&points).unwrap()
    }

    #[test]
    fn test_identical_vectors() {
        let v = unit(&[(1.0, 2.0), (-3.0, 0.5), (2.0, -2.5)]);
        assert!(optimal_cosine_distance(&v, &v) < 1e-3);
    }

    #[test]
    fn test_rotation_is_aligned_away() {
        let shape = [(1.0, 0.0), (0.0, 2.0), (-1.0, 0.0), (0.0, -0.5)];
        let (sin, cos) = 0.7f32.sin_cos();
        let rotated: Vec<(f32, f32)> = shape
            .iter()
            .map(|&(x, y)| (x * cos - y * sin, x * sin + y * cos))
            .collect();
        let d = optimal_cosine_distance(&unit(&shape), &unit(&rotated));
        assert!(d < 1e-3, "distance {}", d);
    }

    #[test]
    fn test_different_shapes_are_far() {
        let a = unit(&[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)]);
        let b = unit(&[(1.0, 0.0), (-1.0, 0.0), (1.0, 0.0), (-1.0, 0.0)]);
        let d = optimal_cosine_distance(&a, &b);
        assert!(d > 0.5 && d <= std::f32::consts::PI);
    }

    #[test]
    fn test_orthogonal_in_both_senses() {
        let a = [1.0, 0.0, 0.0, 0.0];
        let b = [0.0, 0.0, 0.0, 1.0];
        assert_eq!(optimal_cosine_distance(&a, &b), std::f32::consts::FRAC_PI_2);
    }
}
