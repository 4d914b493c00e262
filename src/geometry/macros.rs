/// Creates a [`Coord`](crate::Coord) from ordinate values.
///
/// ```
/// use sfgeo::coord;
///
/// let c = coord! { x: 1.0, y: 2.0 };
/// let c3 = coord! { x: 1.0, y: 2.0, z: 3.0 };
/// ```
#[macro_export]
macro_rules! coord {
    (x: $x:expr, y: $y:expr $(,)?) => {
        $crate::Coord::new($x, $y)
    };
    (x: $x:expr, y: $y:expr, z: $z:expr $(,)?) => {
        $crate::Coord::new($x, $y).with_z($z)
    };
    (x: $x:expr, y: $y:expr, z: $z:expr, m: $m:expr $(,)?) => {
        $crate::Coord::new($x, $y).with_z($z).with_m($m)
    };
}

/// Creates a [`Point`](crate::Point) from ordinate values.
///
/// ```
/// use sfgeo::point;
///
/// let p = point! { x: 1.0, y: 2.0 };
/// ```
#[macro_export]
macro_rules! point {
    ($($tag:tt : $val:expr),* $(,)?) => {
        $crate::Point::new($crate::coord! { $($tag: $val),* })
    };
}

/// Creates a [`LineString`](crate::LineString) from coordinate values.
///
/// ```
/// use sfgeo::line_string;
///
/// let ls = line_string![
///     (x: 0.0, y: 0.0),
///     (x: 10.0, y: 0.0),
/// ];
/// ```
#[macro_export]
macro_rules! line_string {
    () => {
        $crate::LineString::empty()
    };
    ($(( $($tag:tt : $val:expr),* $(,)? )),* $(,)?) => {
        $crate::LineString::from_coords(vec![
            $(
                $crate::coord! { $($tag: $val),* },
            )*
        ])
    };
}

/// Creates a [`Polygon`](crate::Polygon) from coordinate values; rings are
/// closed when the closing coordinate is absent.
///
/// ```
/// use sfgeo::polygon;
///
/// let poly = polygon![
///     (x: 0.0, y: 0.0),
///     (x: 10.0, y: 0.0),
///     (x: 10.0, y: 10.0),
///     (x: 0.0, y: 10.0),
/// ];
///
/// let with_hole = polygon!(
///     exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
///     interiors: [[(x: 2.0, y: 2.0), (x: 8.0, y: 2.0), (x: 8.0, y: 8.0), (x: 2.0, y: 8.0)]],
/// );
/// ```
#[macro_export]
macro_rules! polygon {
    () => {
        $crate::Polygon::empty()
    };
    (
        exterior: [ $(( $($ext_tag:tt : $ext_val:expr),* $(,)? )),* $(,)? ],
        interiors: [ $([ $(( $($int_tag:tt : $int_val:expr),* $(,)? )),* $(,)? ]),* $(,)? ]
        $(,)?
    ) => {
        $crate::Polygon::new(
            $crate::line_string![ $(( $($ext_tag: $ext_val),* )),* ],
            vec![
                $(
                    $crate::line_string![ $(( $($int_tag: $int_val),* )),* ],
                )*
            ],
        )
    };
    ($(( $($tag:tt : $val:expr),* $(,)? )),* $(,)?) => {
        $crate::Polygon::new(
            $crate::line_string![ $(( $($tag: $val),* )),* ],
            vec![],
        )
    };
}

#[cfg(test)]
mod test {
    #[test]
    fn macros_build_geometries() {
        let c = coord! { x: 1.0, y: 2.0, z: 3.0 };
        assert_eq!(c.z, 3.0);

        let ls = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)];
        assert_eq!(ls.num_coords(), 2);

        let poly = polygon![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 0.0, y: 4.0)];
        assert!(poly.exterior().is_closed());

        let holed = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
            interiors: [[(x: 2.0, y: 2.0), (x: 8.0, y: 2.0), (x: 8.0, y: 8.0), (x: 2.0, y: 8.0)]],
        );
        assert_eq!(holed.interiors().len(), 1);
    }
}
